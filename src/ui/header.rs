use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::form::FormState;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &FormState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = if state.is_confirming() {
            ("Submitted".to_string(), STATUS_OK)
        } else if state.errors.is_empty() {
            ("Ready".to_string(), STATUS_OK)
        } else {
            (format!("{} field(s) need attention", state.errors.len()), STATUS_ERROR)
        };
        let position = state
            .values
            .applying_for_position
            .map(|position| position.as_str())
            .unwrap_or("No position selected");

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Job Application", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(position, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
