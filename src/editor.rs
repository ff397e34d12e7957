//! Create/edit form state.
//!
//! The form is opened either empty (create) or pre-filled from an entry
//! (edit). It only hands its fields back once both are non-blank; the
//! shell decides what a save means.

use crate::entry::DiaryEntry;

/// Which field receives typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Content,
}

impl EditorField {
    fn other(self) -> Self {
        match self {
            EditorField::Title => EditorField::Content,
            EditorField::Content => EditorField::Title,
        }
    }
}

/// Whether the form was opened for a new entry or an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { id: String },
}

/// Fields emitted by a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntry {
    pub title: String,
    pub content: String,
}

/// Modal entry form
#[derive(Debug, Clone)]
pub struct Editor {
    mode: EditorMode,
    title: String,
    content: String,
    focus: EditorField,
}

impl Editor {
    /// Open the form. With a target the fields start from its text,
    /// otherwise they start empty.
    pub fn open(target: Option<&DiaryEntry>) -> Self {
        match target {
            Some(entry) => Self {
                mode: EditorMode::Edit { id: entry.id.clone() },
                title: entry.title.clone(),
                content: entry.content.clone(),
                focus: EditorField::Title,
            },
            None => Self {
                mode: EditorMode::Create,
                title: String::new(),
                content: String::new(),
                focus: EditorField::Title,
            },
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn focus(&self) -> EditorField {
        self.focus
    }

    pub fn set_focus(&mut self, field: EditorField) {
        self.focus = field;
    }

    pub fn toggle_focus(&mut self) {
        self.set_focus(self.focus.other());
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            EditorField::Title => &mut self.title,
            EditorField::Content => &mut self.content,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    /// Enter key: the title is single-line, so it moves on to the body
    pub fn newline(&mut self) {
        match self.focus {
            EditorField::Title => self.focus = EditorField::Content,
            EditorField::Content => self.content.push('\n'),
        }
    }

    /// Both fields have something besides whitespace
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Take the fields if the form may be saved. The text is handed
    /// back as typed and the form is left empty. When the gate fails
    /// nothing changes.
    pub fn save(&mut self) -> Option<SavedEntry> {
        if !self.can_save() {
            return None;
        }
        self.focus = EditorField::Title;
        Some(SavedEntry {
            title: std::mem::take(&mut self.title),
            content: std::mem::take(&mut self.content),
        })
    }
}
