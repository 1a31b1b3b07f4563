mod components;

use std::sync::OnceLock;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Popup};
use crate::theme::Theme;

// Load theme colors from system (Omarchy/Hyprland) once at startup
static THEME: OnceLock<Theme> = OnceLock::new();

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(1),  // Info line
            Constraint::Min(4),     // Message board
            Constraint::Length(1),  // Footer
        ])
        .split(f.area());

    draw_info_line(f, app, chunks[0]);
    draw_board(f, app, chunks[1]);
    draw_footer(f, chunks[2]);

    // Draw popups on top
    match app.popup {
        Popup::None => {}
        Popup::Compose => draw_compose_popup(f, app),
        Popup::Help => draw_help_popup(f),
    }
}

fn draw_info_line(f: &mut Frame, app: &App, area: Rect) {
    let line = if app.board.is_empty() {
        Line::from(Span::styled("Ready", Style::default().fg(theme().text_dim)))
    } else {
        Line::from(vec![
            Span::styled(
                format!("{} on screen", app.board.len()),
                Style::default().fg(theme().text),
            ),
            Span::styled(
                format!(" │ auto-dismiss after {} ms", app.config.dismiss_ms),
                Style::default().fg(theme().text_dim),
            ),
        ])
    };

    let info = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(info, area);
}

/// The root content area: every live message, in the order it was shown.
fn draw_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Messages ",
            Style::default().fg(theme().accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme().accent));

    let lines: Vec<Line> = if app.board.is_empty() {
        vec![Line::from(Span::styled(
            "  Nothing to show - press s/e/i/w for samples, m to compose",
            Style::default().fg(theme().text_dim),
        ))]
    } else {
        app.board
            .iter()
            .map(|(_, element)| components::message_line(element, theme()))
            .collect()
    };

    let board = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(board, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("s", Style::default().fg(theme().accent)),
        Span::raw("uccess │ "),
        Span::styled("e", Style::default().fg(theme().accent)),
        Span::raw("rror │ "),
        Span::styled("i", Style::default().fg(theme().accent)),
        Span::raw("nfo │ "),
        Span::styled("w", Style::default().fg(theme().accent)),
        Span::raw("arning │ "),
        Span::styled("m", Style::default().fg(theme().accent)),
        Span::raw(" compose │ "),
        Span::styled("?", Style::default().fg(theme().accent)),
        Span::raw(" help │ "),
        Span::styled("q", Style::default().fg(theme().accent)),
        Span::raw(" quit"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(theme().text_dim));

    f.render_widget(hint, area);
}

fn draw_compose_popup(f: &mut Frame, app: &App) {
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 90 } else { 60 },
        if area.height < 25 { 80 } else { 50 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(" 󰍡 Compose Message ", Style::default().fg(theme().accent)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme().accent));

    f.render_widget(block, popup_area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(popup_area);

    // Kind input (any tag is accepted; empty falls back to "info")
    let kind_active = app.compose_field == 0;
    let kind_cursor = if kind_active { "_" } else { "" };
    let kind_input = Paragraph::new(format!("{}{}", app.kind_buffer, kind_cursor))
        .style(field_style(kind_active))
        .block(
            Block::default()
                .title(Span::styled(
                    " Kind ",
                    Style::default().fg(if kind_active { theme().accent } else { theme().inactive }),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if kind_active {
                    theme().accent
                } else {
                    theme().inactive
                })),
        );
    f.render_widget(kind_input, inner[0]);

    // Text input
    let text_active = app.compose_field == 1;
    let text_cursor = if text_active { "_" } else { "" };
    let text_input = Paragraph::new(format!("{}{}", app.text_buffer, text_cursor))
        .style(field_style(text_active))
        .block(
            Block::default()
                .title(Span::styled(
                    " Text ",
                    Style::default().fg(if text_active { theme().accent } else { theme().inactive }),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if text_active {
                    theme().accent
                } else {
                    theme().inactive
                })),
        );
    f.render_widget(text_input, inner[1]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(theme().accent)),
        Span::raw(" switch field │ "),
        Span::styled("Enter", Style::default().fg(theme().accent)),
        Span::raw(" show │ "),
        Span::styled("Esc", Style::default().fg(theme().accent)),
        Span::raw(" cancel"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(theme().text_dim));
    f.render_widget(hint, inner[2]);
}

fn field_style(active: bool) -> Style {
    if active {
        Style::default().fg(theme().text).bg(theme().bg_selected)
    } else {
        Style::default().fg(theme().text)
    }
}

fn draw_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 70 },
        if area.height < 30 { 95 } else { 75 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled("═══ Messages ═══", Style::default().fg(theme().accent).add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("  s e i w   ", Style::default().fg(theme().accent)),
            Span::raw("Show a sample success / error / info / warning"),
        ]),
        Line::from(vec![
            Span::styled("  m         ", Style::default().fg(theme().accent)),
            Span::raw("Compose a message with any kind tag"),
        ]),
        Line::from(vec![
            Span::raw("            Every message disappears on its own after the"),
        ]),
        Line::from(vec![
            Span::raw("            dismiss window (3000 ms by default)"),
        ]),
        Line::from(""),
        Line::from(Span::styled("═══ Quick Start ═══", Style::default().fg(theme().accent).add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("  tosuto                       ", Style::default().fg(theme().accent)),
            Span::raw("Launch this TUI"),
        ]),
        Line::from(vec![
            Span::styled("  tosuto --send TEXT --kind K  ", Style::default().fg(theme().accent)),
            Span::raw("One-shot desktop notification"),
        ]),
        Line::from(vec![
            Span::styled("  tosuto --settings            ", Style::default().fg(theme().accent)),
            Span::raw("Print settings as JSON"),
        ]),
        Line::from(""),
        Line::from(Span::styled("═══ Configuration ═══", Style::default().fg(theme().accent).add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::raw("  • Settings: "),
            Span::styled("~/.config/tosuto/config.toml", Style::default().fg(theme().text_dim)),
        ]),
        Line::from(vec![
            Span::raw("  • Colors follow the Omarchy system theme when present"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(theme().text_dim)),
            Span::styled("h", Style::default().fg(theme().accent)),
            Span::styled("/", Style::default().fg(theme().text_dim)),
            Span::styled("?", Style::default().fg(theme().accent)),
            Span::styled("/", Style::default().fg(theme().text_dim)),
            Span::styled("Esc", Style::default().fg(theme().accent)),
            Span::styled(" to close", Style::default().fg(theme().text_dim)),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" 󰋖 tosuto Help ", Style::default().fg(theme().accent)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme().accent)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
