//! TUI state and key handling.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::TableState;
use whence_core::{
    Config, DateLabel, FieldErrors, FileStore, LabelOptions, Notice, NoticeState, RenderBoundary,
    SystemClock, TimeInput,
};

/// Input focus
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputMode {
    /// Keys drive navigation and toggles
    #[default]
    Normal,
    /// Keys go into the new-entry field
    Editing,
}

/// One showcased entry: a name and the label displaying its timestamp
pub struct EntryRow {
    pub name: String,
    /// Kept so labels can be rebuilt when display options change
    pub input: Option<TimeInput>,
    pub label: DateLabel,
}

/// Everything the TUI shows and mutates.
pub struct App {
    /// Entries shown in the table
    pub entries: Vec<EntryRow>,
    /// Which row the cursor is on
    pub table_state: TableState,
    /// Whether labels currently show the absolute form
    pub absolute: bool,
    /// Whether labels expose their absolute form as a second column
    pub tooltip: bool,
    /// Whether absolute forms include the time of day
    include_time: bool,
    /// Refresh interval for live labels
    update_interval: Duration,
    /// Current input focus
    pub input_mode: InputMode,
    /// Text being typed into the new-entry field
    pub input_buffer: String,
    /// Validation messages for the new-entry field
    pub field_errors: FieldErrors,
    /// Startup notice, if enabled and not yet dismissed
    pub notice: Option<NoticeState>,
    /// Persisted UI state
    store: FileStore,
    /// Catches failures from store writes so the UI can degrade
    pub boundary: RenderBoundary,
    clock: Arc<SystemClock>,
    /// Count of entries added this session, for default names
    added: usize,
    /// Set when the user asks to leave
    pub should_quit: bool,
}

impl App {
    /// Create a new App from configuration and an opened state store.
    pub fn new(config: &Config, store: FileStore) -> Result<Self> {
        let notice = if config.notice.enabled {
            let notice = Notice::new(
                config.notice.id.clone(),
                config.notice.title.clone(),
                config.notice.body.clone(),
            );
            Some(NoticeState::load(notice, &store)?)
        } else {
            None
        };

        let mut app = Self {
            entries: Vec::new(),
            table_state: TableState::default(),
            absolute: config.display.absolute,
            tooltip: config.display.tooltip,
            include_time: config.display.include_time,
            update_interval: Duration::from_millis(config.display.update_interval_ms),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            field_errors: FieldErrors::new(),
            notice,
            store,
            boundary: RenderBoundary::new(),
            clock: Arc::new(SystemClock),
            added: 0,
            should_quit: false,
        };

        app.seed_sample_entries();
        if !app.entries.is_empty() {
            app.table_state.select(Some(0));
        }

        Ok(app)
    }

    /// Populate the table with entries that exercise every display case.
    fn seed_sample_entries(&mut self) {
        let now_ms = Utc::now().timestamp_millis();
        let minute = 60_000;
        let hour = 60 * minute;
        let day = 24 * hour;

        let samples: Vec<(&str, Option<TimeInput>)> = vec![
            ("Service deployed", Some(TimeInput::from(now_ms - 2 * hour))),
            ("Config changed", Some(TimeInput::from(now_ms - 25 * hour))),
            ("Backup finished", Some(TimeInput::from(now_ms - 10 * day))),
            ("Imported archive", Some(TimeInput::from(now_ms - 400 * day))),
            ("Next maintenance", Some(TimeInput::from(now_ms + 10 * minute))),
            ("Cert expires", Some(TimeInput::from(now_ms + 36 * hour))),
            ("Corrupt record", Some(TimeInput::from("mangled-timestamp"))),
            ("Never synced", None),
        ];

        for (name, input) in samples {
            let label = self.make_label(input.clone());
            self.entries.push(EntryRow {
                name: name.to_string(),
                input,
                label,
            });
        }
    }

    fn label_options(&self) -> LabelOptions {
        LabelOptions {
            show_absolute: self.absolute,
            show_tooltip: self.tooltip,
            include_time: self.include_time,
            update_interval: self.update_interval,
        }
    }

    fn make_label(&self, input: Option<TimeInput>) -> DateLabel {
        DateLabel::new(input, self.label_options(), self.clock.clone())
    }

    /// Replace every label with a fresh instance under the current options.
    fn rebuild_labels(&mut self) {
        let options = self.label_options();
        let clock = self.clock.clone();
        for entry in &mut self.entries {
            entry.label = DateLabel::new(entry.input.clone(), options, clock.clone());
        }
    }

    /// Sum of all label refresh counters; changes when any live label ticked.
    pub fn refresh_generation(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| e.label.refresh_count())
            .sum()
    }

    // ============================================
    // Key handling
    // ============================================

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('a') => {
                self.toggle_absolute();
            }
            KeyCode::Char('t') => {
                self.toggle_tooltip();
            }
            KeyCode::Char('d') => {
                self.dismiss_notice();
            }
            KeyCode::Char('r') => {
                self.boundary.reset();
            }
            KeyCode::Char('i') => {
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.select_first();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.select_last();
            }
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_buffer.clear();
                self.field_errors.clear("timestamp");
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                self.submit_entry();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Pin all labels to absolute, or rebuild them live again.
    ///
    /// Pinning uses the one-way transition on the existing labels; going
    /// back creates fresh instances, since a pinned label stays pinned for
    /// its lifetime.
    fn toggle_absolute(&mut self) {
        if self.absolute {
            self.absolute = false;
            self.rebuild_labels();
        } else {
            self.absolute = true;
            for entry in &mut self.entries {
                entry.label.set_absolute();
            }
        }
    }

    fn toggle_tooltip(&mut self) {
        self.tooltip = !self.tooltip;
        self.rebuild_labels();
    }

    /// Dismiss the notice, routing the store write through the boundary.
    fn dismiss_notice(&mut self) {
        let Some(notice) = self.notice.as_mut() else {
            return;
        };
        if !notice.is_visible() {
            return;
        }
        let store = &mut self.store;
        self.boundary
            .guard("dismissing notice", || notice.dismiss(store));
    }

    /// Validate the typed timestamp and add it as a new entry.
    fn submit_entry(&mut self) {
        self.field_errors.clear("timestamp");

        let text = self.input_buffer.trim().to_string();
        if text.is_empty() {
            self.field_errors.push("timestamp", "enter a timestamp first");
            return;
        }

        let input = TimeInput::parse(&text);
        if input.resolve().is_none() {
            self.field_errors.push(
                "timestamp",
                format!("could not parse {:?} as a timestamp", text),
            );
            return;
        }

        self.added += 1;
        let name = format!("Added entry {}", self.added);
        let label = self.make_label(Some(input.clone()));
        self.entries.push(EntryRow {
            name,
            input: Some(input),
            label,
        });

        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
        self.table_state.select(Some(self.entries.len() - 1));
        tracing::debug!(entry = self.added, "entry added");
    }

    // ============================================
    // Selection
    // ============================================

    fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < self.entries.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let previous = match self.table_state.selected() {
            Some(i) if i > 0 => i - 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(previous));
    }

    fn select_first(&mut self) {
        if !self.entries.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        if !self.entries.is_empty() {
            self.table_state.select(Some(self.entries.len() - 1));
        }
    }

    /// Whether the notice bar should currently occupy screen space.
    pub fn notice_visible(&self) -> bool {
        self.notice.as_ref().is_some_and(|n| n.is_visible())
    }
}
