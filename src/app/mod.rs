//! Application shell
//!
//! Owns the journal, the search query, the editor and the theme flag.
//! Widgets only read from it; every change goes through [`App::apply`].

mod input;


pub use input::{map_key, Intent, Screen};

use crate::config::Config;
use crate::editor::Editor;
use crate::entry::DiaryEntry;
use crate::journal::Journal;
use crate::ui::layout::ListLayout;
use crate::ui::theme::{Theme, ThemeMode, ThemeSet};

/// Application mode - determines what UI to show and how to handle input
#[derive(Debug, Clone)]
pub enum AppMode {
    /// Entry list with search bar
    List,
    /// Create/edit form on top of the list
    Editor(Editor),
}

/// Application state
pub struct App {
    /// Current application mode
    mode: AppMode,
    /// All entries of the session
    journal: Journal,
    /// Current search text
    query: String,
    /// Whether keys go to the search field
    searching: bool,
    /// Selected index in the filtered view
    selected: usize,
    /// Entry the editor was opened for, if editing
    edit_target: Option<String>,
    /// Light/dark flag
    theme_mode: ThemeMode,
    /// Palettes for both flag values
    themes: ThemeSet,
    /// One-line feedback for the status bar
    status: Option<String>,
    /// Configuration
    config: Config,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let themes = config.resolve_themes();
        let theme_mode = ThemeMode::from_dark(config.appearance.start_dark);
        Self {
            mode: AppMode::List,
            journal: Journal::new(),
            query: String::new(),
            searching: false,
            selected: 0,
            edit_target: None,
            theme_mode,
            themes,
            status: None,
            config,
            should_quit: false,
        }
    }

    /// Screen state for key mapping
    pub fn screen(&self) -> Screen {
        match self.mode {
            AppMode::List => Screen::List {
                searching: self.searching,
                has_query: !self.query.is_empty(),
            },
            AppMode::Editor(_) => Screen::Editor,
        }
    }

    /// Apply one user intent
    pub fn apply(&mut self, intent: Intent) {
        tracing::debug!("Applying {:?}", intent);
        self.status = None;

        match intent {
            Intent::Quit => self.should_quit = true,

            Intent::SelectNext => self.next(),
            Intent::SelectPrevious => self.previous(),
            Intent::SelectFirst => self.selected = 0,
            Intent::SelectLast => self.selected = self.visible_len().saturating_sub(1),

            Intent::OpenCreate => self.open_editor(None),
            Intent::OpenEdit => {
                if let Some(id) = self.selected_id() {
                    self.open_editor(Some(id));
                }
            }
            Intent::Delete => {
                if let Some(id) = self.selected_id() {
                    self.journal.remove(&id);
                    self.clamp_selection();
                    self.status = Some("Entry deleted".to_string());
                }
            }
            Intent::ToggleStar => {
                if let Some(id) = self.selected_id() {
                    self.journal.toggle_star(&id);
                }
            }
            Intent::ToggleTheme => {
                self.theme_mode.toggle();
                tracing::debug!("Theme mode: {:?}", self.theme_mode);
            }

            Intent::StartSearch => self.searching = true,
            Intent::SearchInput(c) => self.push_search_char(c),
            Intent::SearchBackspace => self.pop_search_char(),
            Intent::SearchCommit => self.searching = false,
            Intent::SearchClear => self.clear_search(),

            Intent::EditorInput(c) => {
                if let AppMode::Editor(ref mut editor) = self.mode {
                    editor.push_char(c);
                }
            }
            Intent::EditorBackspace => {
                if let AppMode::Editor(ref mut editor) = self.mode {
                    editor.pop_char();
                }
            }
            Intent::EditorNewline => {
                if let AppMode::Editor(ref mut editor) = self.mode {
                    editor.newline();
                }
            }
            Intent::EditorSwitchField => {
                if let AppMode::Editor(ref mut editor) = self.mode {
                    editor.toggle_focus();
                }
            }
            Intent::EditorSave => self.save_editor(),
            Intent::EditorCancel => self.close_editor(),
        }
    }

    /// Open the form, pre-filled when `target` names an entry
    fn open_editor(&mut self, target: Option<String>) {
        let entry = target.as_deref().and_then(|id| self.journal.get(id));
        self.mode = AppMode::Editor(Editor::open(entry));
        self.edit_target = entry.map(|e| e.id.clone());
    }

    /// Back affordance: drop typed changes
    fn close_editor(&mut self) {
        self.mode = AppMode::List;
        self.edit_target = None;
    }

    fn save_editor(&mut self) {
        let AppMode::Editor(ref mut editor) = self.mode else {
            return;
        };
        let Some(saved) = editor.save() else {
            self.status = Some("Title and content are required".to_string());
            return;
        };

        match self.edit_target.take() {
            Some(id) => {
                self.journal.update(&id, saved.title, saved.content);
                tracing::debug!("Edited entry at {:?}", self.journal.position(&id));
            }
            None => {
                let id = self.journal.add(saved.title, saved.content);
                if let Some(pos) = self.visible_entries().iter().position(|e| e.id == id) {
                    self.selected = pos;
                }
            }
        }

        self.mode = AppMode::List;
        self.clamp_selection();
        self.status = Some("Entry saved".to_string());
    }

    fn push_search_char(&mut self, c: char) {
        self.query.push(c);
        self.clamp_selection();
    }

    fn pop_search_char(&mut self) {
        self.query.pop();
        if self.query.is_empty() {
            self.searching = false;
        }
        self.clamp_selection();
    }

    fn clear_search(&mut self) {
        self.query.clear();
        self.searching = false;
        self.clamp_selection();
    }

    /// Move selection up
    fn previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down
    fn next(&mut self) {
        if self.selected < self.visible_len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn visible_len(&self) -> usize {
        self.visible_entries().len()
    }

    fn selected_id(&self) -> Option<String> {
        self.selected_entry().map(|e| e.id.clone())
    }

    /// Entries matching the current query, newest first
    pub fn visible_entries(&self) -> Vec<&DiaryEntry> {
        self.journal.filter(&self.query)
    }

    /// Get the currently selected entry
    pub fn selected_entry(&self) -> Option<&DiaryEntry> {
        self.visible_entries().get(self.selected).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn editor(&self) -> Option<&Editor> {
        match self.mode {
            AppMode::Editor(ref editor) => Some(editor),
            AppMode::List => None,
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Palette for the current flag
    pub fn theme(&self) -> &Theme {
        self.themes.get(self.theme_mode)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn list_layout(&self) -> ListLayout {
        ListLayout::new(self.config.card_display_config().card_height(), 1)
    }

    /// Get config reference
    pub fn config(&self) -> &Config {
        &self.config
    }
}
