use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode, TextInput};

/// Typing into the "Create a task..." input
pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            // Blank input is ignored; the text stays for another try
            app.submit_input();
        }
        KeyCode::Esc => app.mode = Mode::Navigate,
        _ => edit_text(&mut app.input, key),
    }
}

/// Revising the text of the task in edit mode
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.commit_edit();
        }
        KeyCode::Esc => app.abort_edit(),
        // Focus leaving the field saves it, like a blur
        KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
            if app.commit_edit() {
                match key.code {
                    KeyCode::Up | KeyCode::BackTab => app.move_cursor(-1),
                    _ => app.move_cursor(1),
                }
            }
        }
        _ => edit_text(&mut app.edit, key),
    }
}

/// Apply a line-editing key to a text input. Other keys are ignored.
pub(super) fn edit_text(input: &mut TextInput, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => input.delete_to_start(),
        KeyCode::Char('w') if ctrl => input.delete_word_before(),
        KeyCode::Char('a') if ctrl => input.move_home(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        KeyCode::Char(c) if !ctrl => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
