//! Popup shown after an accepted submission.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, POPUP_BORDER, STATUS_OK};

use super::state::FormState;

const MIN_WIDTH: u16 = 36;

/// Render the confirmation overlay, if one is pending.
pub fn render_confirmation(frame: &mut Frame, state: &FormState) {
    let Some(json) = state.confirmation.as_deref() else {
        return;
    };

    let lines = confirmation_lines(json);
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(MIN_WIDTH);
    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(frame.area(), width, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(" Submitted ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn confirmation_lines(json: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            " Form submitted successfully!",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(json.lines().map(|line| {
        Line::from(Span::styled(
            format!(" {line}"),
            Style::default().fg(HEADER_TEXT),
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: OK",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    )));
    lines
}
