//! Feature list: display-state derivation and rendering.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::Feature;
use crate::ui::features::FeatureStoreState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUSED_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    STATUS_ERROR,
};

/// One row of the populated list.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView<'a> {
    pub feature: &'a Feature,
    /// Vote request in flight; only this item's vote control is disabled.
    pub voting: bool,
    pub error: Option<&'a str>,
}

/// What the list panel shows. Exactly one applies, checked in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Populated(Vec<ItemView<'a>>),
}

impl<'a> ListView<'a> {
    pub fn derive(state: &'a FeatureStoreState) -> Self {
        match state {
            FeatureStoreState::Loading { .. } => ListView::Loading,
            FeatureStoreState::Ready {
                error: Some(message),
                ..
            } => ListView::Error(message),
            FeatureStoreState::Ready { features, .. } if features.is_empty() => ListView::Empty,
            FeatureStoreState::Ready {
                features,
                voting,
                vote_errors,
                ..
            } => ListView::Populated(
                features
                    .iter()
                    .map(|feature| ItemView {
                        feature,
                        voting: voting.contains(&feature.id),
                        error: vote_errors.get(&feature.id).map(String::as_str),
                    })
                    .collect(),
            ),
        }
    }

    fn title(&self) -> String {
        match self {
            ListView::Populated(items) => format!(" Features ({}) · Sorted by votes ", items.len()),
            _ => " Features ".to_string(),
        }
    }

    /// Text lines for the panel, plus the first line of the selected item.
    fn lines(&self, selection: usize, focused: bool) -> (Vec<Line<'static>>, usize) {
        let text = Style::default().fg(HEADER_TEXT);
        let dim = text.add_modifier(Modifier::DIM);
        match self {
            ListView::Loading => (vec![Line::styled("Loading features...", dim)], 0),
            ListView::Error(message) => (
                vec![
                    Line::styled("Failed to load features", Style::default().fg(STATUS_ERROR)),
                    Line::styled(message.to_string(), dim),
                    Line::from(""),
                    Line::styled("Press r to retry", dim),
                ],
                0,
            ),
            ListView::Empty => (
                vec![
                    Line::styled("No features yet!", text),
                    Line::styled("Be the first to submit a feature request.", dim),
                ],
                0,
            ),
            ListView::Populated(items) => {
                let mut lines = Vec::new();
                let mut selected_line = 0;
                for (idx, item) in items.iter().enumerate() {
                    if idx == selection {
                        selected_line = lines.len();
                    }
                    let mut entry = item_lines(item);
                    if focused && idx == selection {
                        let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
                        entry = entry.into_iter().map(|line| line.style(highlight)).collect();
                    }
                    lines.extend(entry);
                }
                (lines, selected_line)
            }
        }
    }
}

fn item_lines(item: &ItemView<'_>) -> Vec<Line<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let dim = text.add_modifier(Modifier::DIM);
    let marker = if item.voting { "…" } else { "▲" };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {} ", marker), Style::default().fg(ACCENT)),
        Span::styled(
            format!("{:>4}  ", item.feature.vote_count),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(item.feature.title.clone(), text.add_modifier(Modifier::BOLD)),
        Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
        Span::styled(item.feature.created_date(), dim),
    ])];

    if let Some(description) = &item.feature.description {
        lines.push(Line::styled(format!("         {}", description), dim));
    }
    if let Some(error) = item.error {
        lines.push(Line::styled(
            format!("         {}", error),
            Style::default().fg(STATUS_ERROR),
        ));
    }
    lines
}

pub fn render_list(frame: &mut Frame, area: Rect, view: &ListView<'_>, selection: usize, focused: bool) {
    let (lines, selected_line) = view.lines(selection, focused);

    // Keep the selected item's first line in view.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = (selected_line + 1).saturating_sub(inner_height.max(1));

    let border = if focused { FOCUSED_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(view.title(), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, area);
}
