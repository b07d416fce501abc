use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::justify;

/// Key hints for the current mode
fn mode_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  e edit  \u{2423} toggle  d delete  t theme  q quit ",
        Mode::Insert => "Enter add  Esc back ",
        Mode::Edit => "Enter save  Esc cancel ",
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

/// " 3 tasks · 1 done · 2 pending"
pub fn counts_text(total: usize, completed: usize, pending: usize) -> String {
    format!(
        " {} \u{00B7} {} done \u{00B7} {} pending",
        plural(total, "task", "tasks"),
        completed,
        pending
    )
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let (total, completed, pending) = app.list.counts();

    let left = vec![Span::styled(
        counts_text(total, completed, pending),
        Style::default().fg(app.theme.text).bg(bg),
    )];
    let right = if app.config.ui.show_key_hints {
        vec![Span::styled(
            mode_hints(app.mode),
            Style::default().fg(app.theme.dim).bg(bg),
        )]
    } else {
        Vec::new()
    };

    let line = Line::from(justify(left, right, width, Style::default().bg(bg)));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
