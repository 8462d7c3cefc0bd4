use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    base_url: &'a str,
    last_load_ok: Option<bool>,
}

impl<'a> Header<'a> {
    /// `last_load_ok` is `None` while a load is in flight.
    pub fn new(base_url: &'a str, last_load_ok: Option<bool>) -> Self {
        Self { base_url, last_load_ok }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = match self.last_load_ok {
            Some(true) => ("●", STATUS_OK),
            Some(false) => ("●", STATUS_ERROR),
            None => ("○", HEADER_SEPARATOR),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled("  ", text_style),
            Span::styled(
                "Feature Voting",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("Submit and vote on feature requests", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.base_url.to_string(), text_style.add_modifier(Modifier::DIM)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
