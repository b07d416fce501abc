use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::io::state::MemoryPreferences;
use crate::model::AppConfig;
use crate::tui::app::{App, TextInput};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return it (styles included).
pub fn render_to_buffer<F>(w: u16, h: u16, f: F) -> Buffer
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let buf = render_to_buffer(w, h, f);
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Prefix every line with `|` so leading spaces survive inline snapshots.
pub fn framed(output: &str) -> String {
    output
        .lines()
        .map(|l| format!("|{}", l))
        .collect::<Vec<_>>()
        .join("\n")
}

/// An app with the given tasks (all pending), light theme, cursor on the first row.
pub fn app_with_tasks(items: &[&str]) -> App {
    let mut app = App::new(Box::new(MemoryPreferences::default()), AppConfig::default());
    for item in items {
        app.input = TextInput::with_text(item);
        app.submit_input();
    }
    app.cursor = 0;
    app
}
