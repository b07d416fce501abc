use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::paths;
use crate::io::state::{FilePreferences, MemoryPreferences, PreferenceStore};
use crate::model::{AppConfig, Filter, TaskId, TaskList};
use crate::ops::{task_ops, theme_ops};
use crate::util::unicode;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the task list
    Navigate,
    /// Typing into the "Create a task..." input
    Insert,
    /// Revising the text of the task that has `editing` set
    Edit,
}

/// A single-line text buffer with a byte-offset cursor on a grapheme boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub buffer: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn with_text(text: &str) -> Self {
        TextInput {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        // Task text is a single line
        let c = if c.is_control() { ' ' } else { c };
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        let clean: String = s
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn delete_word_before(&mut self) {
        let start = unicode::word_start_before(&self.buffer, self.cursor);
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn delete_to_start(&mut self) {
        self.buffer.replace_range(..self.cursor, "");
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }
}

/// Main application state
pub struct App {
    pub list: TaskList,
    prefs: Box<dyn PreferenceStore>,
    pub config: AppConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the filtered view
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// The "Create a task..." input
    pub input: TextInput,
    /// Buffer for the task being edited
    pub edit: TextInput,
}

impl App {
    /// Build the app, restoring the theme flag from `prefs`
    pub fn new(prefs: Box<dyn PreferenceStore>, config: AppConfig) -> Self {
        let list = TaskList::with_preferences(prefs.as_ref());
        let theme = Theme::for_mode(list.dark_mode(), &config.ui);
        App {
            list,
            prefs,
            config,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            input: TextInput::default(),
            edit: TextInput::default(),
        }
    }

    /// IDs of the filtered view, in display order
    pub fn visible_ids(&self) -> Vec<TaskId> {
        self.list.filtered_view().iter().map(|t| t.id).collect()
    }

    /// ID of the task under the cursor
    pub fn selected_id(&self) -> Option<TaskId> {
        self.visible_ids().get(self.cursor).copied()
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_ids().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn clamp_cursor(&mut self) {
        self.move_cursor(0);
    }

    /// Put the cursor on `id` if it is visible, otherwise keep it in range
    pub fn select(&mut self, id: TaskId) {
        if let Some(pos) = self.visible_ids().iter().position(|v| *v == id) {
            self.cursor = pos;
        } else {
            self.clamp_cursor();
        }
    }

    // -----------------------------------------------------------------------
    // Store actions
    // -----------------------------------------------------------------------

    /// Add the input text as a task; the input is cleared on success
    pub fn submit_input(&mut self) -> bool {
        let Some(id) = task_ops::add_task(&mut self.list, &self.input.buffer) else {
            return false;
        };
        self.input.clear();
        self.select(id);
        true
    }

    pub fn toggle_selected(&mut self) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        let applied = task_ops::toggle_complete(&mut self.list, id);
        // The task may have left the filtered view
        self.clamp_cursor();
        applied
    }

    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        let applied = task_ops::delete_task(&mut self.list, id);
        self.clamp_cursor();
        applied
    }

    /// Enter Edit mode on the selected task
    pub fn begin_edit(&mut self) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        if !task_ops::enable_editing(&mut self.list, id) {
            return false;
        }
        let text = self.list.get(id).map(|t| t.text.clone()).unwrap_or_default();
        self.edit = TextInput::with_text(&text);
        self.mode = Mode::Edit;
        true
    }

    /// Save the edit buffer. Blank text keeps Edit mode.
    pub fn commit_edit(&mut self) -> bool {
        let Some(id) = self.list.editing_task().map(|t| t.id) else {
            self.mode = Mode::Navigate;
            return false;
        };
        if !task_ops::save_edit(&mut self.list, id, &self.edit.buffer) {
            return false;
        }
        self.edit.clear();
        self.mode = Mode::Navigate;
        self.select(id);
        true
    }

    pub fn abort_edit(&mut self) {
        if let Some(id) = self.list.editing_task().map(|t| t.id) {
            task_ops::cancel_edit(&mut self.list, id);
        }
        self.edit.clear();
        self.mode = Mode::Navigate;
    }

    pub fn set_filter(&mut self, filter: Filter) {
        let selected = self.selected_id();
        task_ops::set_filter(&mut self.list, filter);
        match selected {
            Some(id) => self.select(id),
            None => self.clamp_cursor(),
        }
    }

    /// Flip light/dark, persist it, and swap the palette
    pub fn toggle_theme(&mut self) {
        let dark = theme_ops::toggle_theme(&mut self.list, self.prefs.as_mut());
        self.theme = Theme::for_mode(dark, &self.config.ui);
    }
}

/// Pick the preference store for a config directory
fn open_preferences(config_dir: Option<&Path>) -> Box<dyn PreferenceStore> {
    match config_dir {
        Some(dir) => Box::new(FilePreferences::in_dir(dir)),
        None => {
            tracing::warn!("no config directory; theme preference will not persist");
            Box::new(MemoryPreferences::default())
        }
    }
}

/// Run the TUI application
pub fn run(config_dir_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = paths::config_dir(config_dir_override);
    let config = match &config_dir {
        Some(dir) => read_config(dir)?,
        None => AppConfig::default(),
    };
    let prefs = open_preferences(config_dir.as_deref());
    let mut app = App::new(prefs, config);
    tracing::info!(dark = app.list.dark_mode(), "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!(tasks = app.list.len(), "tui exited");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
