use crate::form::{Field, FieldKind, Position};
use crate::ui::app::App;
use crate::ui::form::{FieldChange, Focus, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Position choices in the order Left/Right cycles through them.
const POSITION_CYCLE: [Option<Position>; 4] = [
    None,
    Some(Position::Developer),
    Some(Position::Designer),
    Some(Position::Manager),
];

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // The confirmation is modal, like the browser alert it replaces.
    if app.form().is_confirming() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_confirmation();
        }
        return;
    }

    if key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reset();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.dispatch(FormIntent::FocusNext);
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.dispatch(FormIntent::FocusPrev);
            return;
        }
        _ => {}
    }

    match app.form().focus {
        Focus::SubmitButton => {
            if key.code == KeyCode::Enter {
                app.submit();
            }
        }
        Focus::ResetButton => {
            if key.code == KeyCode::Enter {
                app.reset();
            }
        }
        Focus::Field(field) => handle_field_key(app, field, key),
    }
}

fn handle_field_key(app: &mut App, field: Field, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.dispatch(FormIntent::FocusNext);
        return;
    }

    match field.kind() {
        FieldKind::Text => {
            let Some(current) = field.text(&app.form().values) else {
                return;
            };
            let mut value = current.to_string();
            match key.code {
                KeyCode::Char(ch) if is_plain(key) => value.push(ch),
                KeyCode::Backspace => {
                    if value.pop().is_none() {
                        return;
                    }
                }
                _ => return,
            }
            app.change(FieldChange::Text { field, value });
        }
        FieldKind::Select => {
            let current = app.form().values.applying_for_position;
            let next = match key.code {
                KeyCode::Left => cycle_position(current, -1),
                KeyCode::Right => cycle_position(current, 1),
                KeyCode::Char('d') | KeyCode::Char('D') => Some(Position::Developer),
                KeyCode::Char('g') | KeyCode::Char('G') => Some(Position::Designer),
                KeyCode::Char('m') | KeyCode::Char('M') => Some(Position::Manager),
                KeyCode::Backspace | KeyCode::Delete => None,
                _ => return,
            };
            if next != current {
                app.change(FieldChange::Position(next));
            }
        }
        FieldKind::Checklist => match key.code {
            KeyCode::Left => app.dispatch(FormIntent::MoveSkillCursor(-1)),
            KeyCode::Right => app.dispatch(FormIntent::MoveSkillCursor(1)),
            KeyCode::Char(' ') => {
                let skill = app.form().highlighted_skill();
                let checked = !app.form().values.has_skill(skill);
                app.change(FieldChange::Skill { skill, checked });
            }
            _ => {}
        },
    }
}

fn cycle_position(current: Option<Position>, step: isize) -> Option<Position> {
    let len = POSITION_CYCLE.len() as isize;
    let index = POSITION_CYCLE
        .iter()
        .position(|choice| *choice == current)
        .unwrap_or(0) as isize;
    POSITION_CYCLE[(index + step).rem_euclid(len) as usize]
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
