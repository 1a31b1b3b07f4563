use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::AppConfig;
use crate::message::{ElementId, MessageBoard, MessageHandler, RemovalScheduler, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Compose,  // Free-form (kind, text) entry
    Help,
}

pub struct App {
    pub popup: Popup,

    // The root content area messages are appended to
    pub board: MessageBoard,
    handler: MessageHandler,
    expiry_rx: UnboundedReceiver<ElementId>,

    // Config
    pub config: AppConfig,

    // Compose popup state
    pub kind_buffer: String,
    pub text_buffer: String,
    pub compose_field: usize,  // 0 = kind, 1 = text
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let (scheduler, expiry_rx) = RemovalScheduler::channel();
        let handler = MessageHandler::new(scheduler)
            .with_base_class(config.base_class.clone())
            .with_dismiss_after(config.dismiss_after());

        let mut app = Self {
            popup: Popup::None,

            board: MessageBoard::new(),
            handler,
            expiry_rx,

            config,

            kind_buffer: String::new(),
            text_buffer: String::new(),
            compose_field: 0,
        };

        // The canonical sample pair, shown once the surface exists
        if app.config.startup_demo {
            app.show("success", "Operation completed successfully!");
            app.show("error", "An error occurred while processing your request.");
        }

        app
    }

    /// Show a transient message on the board.
    ///
    /// Any kind string is accepted; the text is displayed verbatim.
    pub fn show(&mut self, kind: &str, text: &str) {
        self.handler.show_message(&mut self.board, kind, text);

        if self.config.desktop_notifications {
            if let Err(e) = crate::notify(kind, text) {
                tracing::warn!("Desktop notification failed: {}", e);
            }
        }
    }

    /// Apply expiries delivered by the removal timers.
    pub fn tick(&mut self) {
        while let Ok(id) = self.expiry_rx.try_recv() {
            if self.board.remove(id) {
                tracing::debug!(%id, "message expired");
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.popup != Popup::None {
            return self.handle_popup_key(key);
        }

        self.handle_normal_key(key)
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Sample messages, one per known kind
            KeyCode::Char('s') => self.show("success", "Operation completed successfully!"),
            KeyCode::Char('e') => self.show("error", "An error occurred while processing your request."),
            KeyCode::Char('i') => self.show("info", "Synced 14 items from the server."),
            KeyCode::Char('w') => self.show("warning", "Disk space is running low."),

            // Free-form message
            KeyCode::Char('m') => self.start_compose(),

            // Help (? or h)
            KeyCode::Char('?') | KeyCode::Char('h') => self.popup = Popup::Help,

            _ => {}
        }
        Ok(())
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.popup {
            Popup::Compose => self.handle_compose_key(key),
            Popup::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Enter | KeyCode::Char('q')
                ) {
                    self.popup = Popup::None;
                }
                Ok(())
            }
            Popup::None => Ok(()),
        }
    }

    fn start_compose(&mut self) {
        self.kind_buffer.clear();
        self.text_buffer.clear();
        self.compose_field = 0;
        self.popup = Popup::Compose;
    }

    fn handle_compose_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.popup = Popup::None,
            KeyCode::Tab | KeyCode::BackTab => self.compose_field = 1 - self.compose_field,
            KeyCode::Enter => self.submit_compose(),
            KeyCode::Backspace => {
                self.active_buffer_mut().pop();
            }
            KeyCode::Char(c) => self.active_buffer_mut().push(c),
            _ => {}
        }
        Ok(())
    }

    fn active_buffer_mut(&mut self) -> &mut String {
        if self.compose_field == 0 {
            &mut self.kind_buffer
        } else {
            &mut self.text_buffer
        }
    }

    fn submit_compose(&mut self) {
        // An empty message is not worth showing; an empty kind is fine
        // and falls back to "info".
        if self.text_buffer.is_empty() {
            return;
        }

        let kind = if self.kind_buffer.trim().is_empty() {
            "info".to_string()
        } else {
            self.kind_buffer.trim().to_string()
        };
        let text = self.text_buffer.clone();

        self.show(&kind, &text);
        self.popup = Popup::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn quiet_config() -> AppConfig {
        AppConfig {
            startup_demo: false,
            desktop_notifications: false,
            ..AppConfig::default()
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn startup_demo_shows_the_canonical_pair() {
        let app = App::new(AppConfig {
            desktop_notifications: false,
            ..AppConfig::default()
        });

        let entries: Vec<_> = app.board.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1.classes(), &["message", "success"]);
        assert_eq!(entries[0].1.text(), "Operation completed successfully!");
        assert_eq!(entries[1].1.classes(), &["message", "error"]);
        assert_eq!(entries[1].1.text(), "An error occurred while processing your request.");
    }

    #[tokio::test(start_paused = true)]
    async fn demo_can_be_disabled() {
        let app = App::new(quiet_config());
        assert!(app.board.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn sample_keys_emit_their_kind() {
        let mut app = App::new(quiet_config());

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('w'));

        let entries: Vec<_> = app.board.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1.kind_token(), Some("success"));
        assert_eq!(entries[1].1.kind_token(), Some("warning"));
    }

    #[tokio::test(start_paused = true)]
    async fn tick_removes_expired_messages() {
        let mut app = App::new(quiet_config());
        app.show("info", "soon gone");
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;

        app.tick();
        assert!(app.board.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn tick_leaves_unexpired_messages_alone() {
        let mut app = App::new(quiet_config());
        app.show("info", "still here");
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(2000)).await;
        tokio::task::yield_now().await;

        app.tick();
        assert_eq!(app.board.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn compose_accepts_any_kind_string() {
        let mut app = App::new(quiet_config());

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.popup, Popup::Compose);

        for c in "celebration".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "We shipped!".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.popup, Popup::None);
        let (_, element) = app.board.iter().next().unwrap();
        assert_eq!(element.kind_token(), Some("celebration"));
        assert_eq!(element.text(), "We shipped!");
    }

    #[tokio::test(start_paused = true)]
    async fn compose_without_text_shows_nothing() {
        let mut app = App::new(quiet_config());

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Enter);

        assert!(app.board.is_empty());
        // Popup stays open until there is something to show or Esc
        assert_eq!(app.popup, Popup::Compose);
    }

    #[tokio::test(start_paused = true)]
    async fn compose_kind_falls_back_to_info() {
        let mut app = App::new(quiet_config());

        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Tab);
        for c in "plain".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        let (_, element) = app.board.iter().next().unwrap();
        assert_eq!(element.kind_token(), Some("info"));
    }

    #[tokio::test(start_paused = true)]
    async fn help_popup_opens_and_closes() {
        let mut app = App::new(quiet_config());

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.popup, Popup::Help);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.popup, Popup::None);
    }
}
