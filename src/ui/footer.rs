use crate::form::FieldKind;
use crate::ui::form::{Focus, FormState};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

const FORM_KEYS: [&str; 4] = [
    "Tab/↑↓: Move",
    "Ctrl+S: Submit",
    "Ctrl+R: Reset",
    "Ctrl+Q: Quit",
];

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, state: &FormState) -> Paragraph<'static> {
        let hints = format!(" {}", key_hints(state).join(SEPARATOR));
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Keys for the focused element first, then the ones that work anywhere.
fn key_hints(state: &FormState) -> Vec<&'static str> {
    if state.is_confirming() {
        return vec!["Enter: OK", "Ctrl+Q: Quit"];
    }

    let focused: &[&str] = match state.focus {
        Focus::Field(field) => match field.kind() {
            FieldKind::Text => &["Type: Edit", "Backspace: Delete"],
            FieldKind::Select => &["←→: Choose", "d/g/m: Pick"],
            FieldKind::Checklist => &["←→: Move", "Space: Toggle"],
        },
        Focus::SubmitButton | Focus::ResetButton => &["Enter: Press"],
    };
    focused.iter().chain(FORM_KEYS.iter()).copied().collect()
}
