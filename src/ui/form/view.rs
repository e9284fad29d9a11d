//! Rendering of the form fields and buttons.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::form::{visible_fields, Field, FieldKind, Skill};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, INPUT_TEXT, STATUS_ERROR, STATUS_OK,
};

use super::state::{Focus, FormState};

const INDENT: &str = "  ";
const TEXT_CURSOR: &str = "▏";
const POSITION_PLACEHOLDER: &str = "Select a position";

/// Render the form into `area`, scrolled so the focused item stays visible.
pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState) {
    let block = Block::default()
        .title(Span::styled(" Job Application Form ", Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);

    let (lines, focus_line) = form_lines(state);
    let scroll = focus_line.saturating_sub(inner.height.saturating_sub(2) as usize);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}

/// All form lines plus the index of the line holding the focused item.
fn form_lines(state: &FormState) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut focus_line = 0;

    for field in visible_fields(&state.values) {
        let focused = state.focus == Focus::Field(field);
        if focused {
            focus_line = lines.len() + 1;
        }
        lines.push(label_line(field, focused));
        lines.extend(value_lines(state, field, focused));
        if let Some(message) = state.errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("{INDENT}{message}"),
                Style::default().fg(STATUS_ERROR),
            )));
        }
        lines.push(Line::from(""));
    }

    if matches!(state.focus, Focus::SubmitButton | Focus::ResetButton) {
        focus_line = lines.len();
    }
    lines.push(button_line(state));

    (lines, focus_line)
}

fn label_line(field: Field, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { INDENT };
    let mut style = Style::default().fg(HEADER_TEXT);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(field.label(), style),
    ])
}

fn value_lines(state: &FormState, field: Field, focused: bool) -> Vec<Line<'static>> {
    let disabled = state.is_disabled();
    let mut style = Style::default().fg(INPUT_TEXT);
    if state.errors.contains(field) {
        style = style.fg(STATUS_ERROR);
    }
    if disabled {
        style = style.add_modifier(Modifier::DIM);
    }
    let editing = focused && !disabled;

    match field.kind() {
        FieldKind::Text => {
            let value = field.text(&state.values).unwrap_or_default().to_string();
            let mut spans = vec![Span::raw(INDENT), Span::styled(value, style)];
            if editing {
                spans.push(Span::styled(TEXT_CURSOR, Style::default().fg(ACCENT)));
            }
            let mut line = Line::from(spans);
            if editing {
                line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            }
            vec![line]
        }
        FieldKind::Select => {
            let selected = state
                .values
                .applying_for_position
                .map(|position| position.as_str())
                .unwrap_or(POSITION_PLACEHOLDER);
            let text = if editing {
                format!("{INDENT}◀ {selected} ▶")
            } else {
                format!("{INDENT}{selected}")
            };
            let mut line = Line::from(Span::styled(text, style));
            if editing {
                line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            }
            vec![line]
        }
        FieldKind::Checklist => Skill::ALL
            .into_iter()
            .map(|skill| {
                let mark = if state.values.has_skill(skill) { "[x]" } else { "[ ]" };
                let mut line = Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(format!("{mark} {}", skill.label()), style),
                ]);
                if editing && state.highlighted_skill() == skill {
                    line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
                }
                line
            })
            .collect(),
    }
}

fn button_line(state: &FormState) -> Line<'static> {
    let button_style = |focused: bool, disabled: bool| {
        let mut style = Style::default().fg(HEADER_TEXT);
        if focused {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        if disabled {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    };

    let submit_focused = state.focus == Focus::SubmitButton;
    let reset_focused = state.focus == Focus::ResetButton;
    Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            " Submit ",
            button_style(submit_focused, state.is_disabled()).fg(STATUS_OK),
        ),
        Span::raw("    "),
        Span::styled(" Reset ", button_style(reset_focused, false)),
    ])
}
