//! Per-message rendering helpers.

use ratatui::text::{Line, Span};

use crate::message::{Element, Kind};
use crate::theme::Theme;

/// Icon glyph for a kind. Unknown kinds share the neutral bullet.
pub fn kind_icon(kind: &Kind) -> &'static str {
    match kind {
        Kind::Success => "󰄬",
        Kind::Error => "󰅖",
        Kind::Info => "󰋽",
        Kind::Warning => "󰀪",
        Kind::Other(_) => "•",
    }
}

/// One board entry as a display line: icon plus verbatim text.
///
/// The text goes through `Span::raw` untouched; nothing in it is ever
/// interpreted as markup.
pub fn message_line<'a>(element: &'a Element, theme: &Theme) -> Line<'a> {
    let kind = element
        .kind_token()
        .map(Kind::from_token)
        .unwrap_or_else(|| Kind::Other(String::new()));
    let style = theme.kind_style(&kind);

    Line::from(vec![
        Span::styled(format!(" {} ", kind_icon(&kind)), style),
        Span::styled(element.text(), style),
    ])
}
