pub mod header;
pub mod helpers;
pub mod profile_panel;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Terminals narrower than this hide the profile panel
pub const PROFILE_PANEL_MIN_WIDTH: u16 = 60;
/// Width of the profile panel, including its border
pub const PROFILE_PANEL_WIDTH: u16 = 24;

/// Main render function: dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Optional profile panel on the left
    let main = if area.width >= PROFILE_PANEL_MIN_WIDTH {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(PROFILE_PANEL_WIDTH), Constraint::Min(1)])
            .split(area);
        profile_panel::render_profile_panel(frame, app, cols[0]);
        cols[1]
    } else {
        area
    };

    // Layout: header (title, input, filters) | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(main);

    header::render_header(frame, app, chunks[0]);
    task_list::render_task_list(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    #[test]
    fn wide_terminal_shows_profile_panel() {
        let mut app = app_with_tasks(&["Buy milk"]);
        app.config.profile.name = "Reige J Bongo".into();
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("Reige J Bongo"));
        assert!(output.contains("Tasks"));
        assert!(output.contains("[ ] Buy milk"));
    }

    #[test]
    fn narrow_terminal_hides_profile_panel() {
        let mut app = app_with_tasks(&["Buy milk"]);
        app.config.profile.name = "Reige J Bongo".into();
        let output = render_to_string(40, 12, |frame, _| render(frame, &mut app));
        assert!(!output.contains("Reige"));
        assert!(output.contains("[ ] Buy milk"));
    }
}
