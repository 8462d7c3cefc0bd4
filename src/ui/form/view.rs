use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use crate::ui::theme::{
    ACCENT, FOCUSED_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
};

use super::state::{FormField, FormState};

pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState, focused: bool) {
    let border = if focused { FOCUSED_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(" Submit New Feature ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let fields = [
        (FormField::Title, "Title *", &state.title, TITLE_MAX_CHARS, rows[0]),
        (
            FormField::Description,
            "Description (optional)",
            &state.description,
            DESCRIPTION_MAX_CHARS,
            rows[1],
        ),
    ];

    for (field, label, value, max, rect) in fields {
        let active = focused && state.focused == field;
        let visible = visible_tail(value, rect.width.saturating_sub(2) as usize);
        let input_border = if active { FOCUSED_BORDER } else { HEADER_SEPARATOR };
        let input = Paragraph::new(Line::styled(visible.clone(), Style::default().fg(HEADER_TEXT)))
            .block(
                Block::default()
                    .title(format!(" {} ({}/{}) ", label, value.chars().count(), max))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(input_border)),
            );
        frame.render_widget(input, rect);

        if active && !state.is_submitting() && rect.width > 2 && rect.height > 2 {
            let offset = (visible.chars().count() as u16).min(rect.width.saturating_sub(3));
            frame.set_cursor_position(Position::new(rect.x + 1 + offset, rect.y + 1));
        }
    }

    if let Some(error) = &state.error {
        frame.render_widget(
            Paragraph::new(Line::styled(error.clone(), Style::default().fg(STATUS_ERROR))),
            rows[2],
        );
    }

    let status = if state.is_submitting() {
        "Submitting..."
    } else {
        "Ctrl+S: Submit Feature"
    };
    frame.render_widget(
        Paragraph::new(Line::styled(
            status,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
        rows[3],
    );
}

/// Last `width` characters of `value`, so the cursor end stays visible.
fn visible_tail(value: &str, width: usize) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(width)).collect()
}
