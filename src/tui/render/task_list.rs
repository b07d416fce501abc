use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Filter, Task};
use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::{input_spans, spans_width};

/// Hints shown after the edit field when there is room
const SAVE_HINT: &str = "\u{2714} save";
const CANCEL_HINT: &str = "\u{2716} cancel";

/// Checkbox for a task row
fn checkbox(task: &Task) -> &'static str {
    if task.completed { "[x]" } else { "[ ]" }
}

/// Message for an empty filtered view
fn empty_message(app: &App) -> &'static str {
    if app.list.is_empty() {
        return " No tasks";
    }
    match app.list.filter() {
        Filter::Completed => " No completed tasks",
        Filter::Pending => " No pending tasks",
        Filter::All => " No tasks",
    }
}

/// Render the filtered task list
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible_height = area.height as usize;
    let row_count = app.list.filtered_view().len();

    if row_count == 0 {
        let empty = Paragraph::new(empty_message(app))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor on screen
    app.clamp_cursor();
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
    app.scroll_offset = app.scroll_offset.min(row_count.saturating_sub(1));

    let app: &App = app;
    let width = area.width as usize;
    let view = app.list.filtered_view();
    let end = row_count.min(app.scroll_offset + visible_height);
    let lines: Vec<Line> = view[app.scroll_offset..end]
        .iter()
        .zip(app.scroll_offset..end)
        .map(|(task, row)| render_task_line(app, task, row == app.cursor, width))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_task_line(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'static> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let box_fg = if task.completed {
        app.theme.green
    } else {
        app.theme.text
    };

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(checkbox(task), Style::default().fg(box_fg).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
    ];
    let room = width.saturating_sub(spans_width(&spans) + 1);

    if task.editing && app.mode == Mode::Edit {
        let hints_w =
            4 + unicode::display_width(SAVE_HINT) + unicode::display_width(CANCEL_HINT);
        let show_hints = room > hints_w + 10;
        let field_w = if show_hints { room - hints_w } else { room };
        let edit_bg = app.theme.input_bg;
        spans.extend(input_spans(
            &app.edit,
            field_w,
            true,
            Style::default().fg(app.theme.text_bright).bg(edit_bg),
            Style::default().fg(app.theme.highlight).bg(edit_bg),
        ));
        if show_hints {
            spans.extend([
                Span::styled("  ", Style::default().bg(bg)),
                Span::styled(SAVE_HINT, Style::default().fg(app.theme.green).bg(bg)),
                Span::styled("  ", Style::default().bg(bg)),
                Span::styled(CANCEL_HINT, Style::default().fg(app.theme.red).bg(bg)),
            ]);
        }
    } else {
        let text_style = if task.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default().fg(app.theme.text_bright).bg(bg)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        spans.push(Span::styled(
            unicode::truncate_to_width(&task.text, room),
            text_style,
        ));
    }

    Line::from(spans).style(Style::default().bg(bg))
}
