use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::{App, Mode};

use super::helpers::{input_spans, justify};

/// Rows: title, blank, input, blank, filter tabs, blank
pub const HEADER_HEIGHT: u16 = 6;

pub const INPUT_PLACEHOLDER: &str = "Create a task...";

/// Label of the theme toggle: names the theme it switches to
pub fn theme_toggle_label(dark: bool) -> &'static str {
    if dark {
        "\u{2600} Light Mode"
    } else {
        "\u{263E} Dark Mode"
    }
}

/// Render the title row, task input and filter tabs
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let lines = vec![
        title_line(app, width),
        Line::default(),
        input_line(app, width),
        Line::default(),
        filter_line(app),
        Line::default(),
    ];

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn title_line(app: &App, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let title = vec![Span::styled(
        " Tasks",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let toggle = vec![
        Span::styled(
            theme_toggle_label(app.list.dark_mode()),
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(" ", Style::default().bg(bg)),
    ];
    Line::from(justify(title, toggle, width, Style::default().bg(bg)))
}

fn input_line(app: &App, width: usize) -> Line<'static> {
    let bg = app.theme.input_bg;
    let focused = app.mode == Mode::Insert;
    let prompt_fg = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let mut spans = vec![Span::styled(" > ", Style::default().fg(prompt_fg).bg(bg))];
    let room = width.saturating_sub(4);

    if app.input.is_empty() {
        if focused {
            spans.push(Span::styled(
                super::helpers::CURSOR_GLYPH,
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
        spans.push(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.extend(input_spans(
            &app.input,
            room,
            focused,
            Style::default().fg(app.theme.text_bright).bg(bg),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }
    Line::from(spans).style(Style::default().bg(bg))
}

fn filter_line(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let active = app.list.filter();
    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for filter in Filter::ALL {
        let style = if filter == active {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }
    Line::from(spans)
}
