use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.move_cursor(isize::MAX),

        // Focus the task input
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('/') => app.mode = Mode::Insert,

        // Task actions
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
            app.toggle_selected();
        }
        KeyCode::Char('e') => {
            app.begin_edit();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
        }

        // Filters
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Completed),
        KeyCode::Char('3') => app.set_filter(Filter::Pending),
        KeyCode::Tab => app.set_filter(app.list.filter().next()),
        KeyCode::BackTab => app.set_filter(app.list.filter().prev()),

        KeyCode::Char('t') => app.toggle_theme(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::io::state::MemoryPreferences;
    use crate::model::{AppConfig, Filter};
    use crate::tui::app::{App, Mode};
    use crate::tui::input::test_keys::*;

    fn app_with(items: &[&str]) -> (App, MemoryPreferences) {
        let prefs = MemoryPreferences::default();
        let mut app = App::new(Box::new(prefs.clone()), AppConfig::default());
        for item in items {
            press(&mut app, KeyCode::Char('a'));
            type_str(&mut app, item);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Esc);
        }
        app.cursor = 0;
        (app, prefs)
    }

    fn texts(app: &App) -> Vec<String> {
        app.list
            .filtered_view()
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let (mut app, _) = app_with(&["a", "b", "c"]);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn space_toggles_and_d_deletes() {
        let (mut app, _) = app_with(&["a", "b"]);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.list.tasks()[0].completed);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.list.tasks()[0].completed);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(texts(&app), vec!["b"]);
    }

    #[test]
    fn number_keys_and_tab_select_filters() {
        let (mut app, _) = app_with(&["Buy milk", "Walk dog"]);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.list.filter(), Filter::Completed);
        assert_eq!(texts(&app), vec!["Buy milk"]);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(texts(&app), vec!["Walk dog"]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.list.filter(), Filter::All);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.list.filter(), Filter::Pending);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(texts(&app), vec!["Buy milk", "Walk dog"]);
    }

    #[test]
    fn t_toggles_theme_and_saves() {
        let (mut app, prefs) = app_with(&[]);
        press(&mut app, KeyCode::Char('t'));
        assert!(app.list.dark_mode());
        press(&mut app, KeyCode::Char('t'));
        assert!(!app.list.dark_mode());
        assert_eq!(prefs.saves(), vec![true, false]);
    }

    #[test]
    fn e_enters_edit_mode() {
        let (mut app, _) = app_with(&["a"]);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.list.tasks()[0].editing);
    }

    #[test]
    fn actions_on_empty_list_are_ignored() {
        let (mut app, _) = app_with(&[]);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Navigate);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('j'));
        assert!(app.list.is_empty());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn q_quits() {
        let (mut app, _) = app_with(&[]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
