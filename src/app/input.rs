//! Key event to intent mapping
//!
//! Pure function of the key and the current screen, so bindings can be
//! tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Quit,

    // List navigation
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,

    // Card actions
    OpenCreate,
    OpenEdit,
    Delete,
    ToggleStar,
    ToggleTheme,

    // Search field
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    SearchCommit,
    SearchClear,

    // Editor form
    EditorInput(char),
    EditorBackspace,
    EditorNewline,
    EditorSwitchField,
    EditorSave,
    EditorCancel,
}

/// Screen state relevant to key mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List { searching: bool, has_query: bool },
    Editor,
}

/// Map a key press to an intent for the given screen
pub fn map_key(key: KeyEvent, screen: Screen) -> Option<Intent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    match screen {
        Screen::Editor => match key.code {
            KeyCode::Char('s') if ctrl => Some(Intent::EditorSave),
            KeyCode::Esc => Some(Intent::EditorCancel),
            KeyCode::Tab | KeyCode::BackTab => Some(Intent::EditorSwitchField),
            KeyCode::Enter => Some(Intent::EditorNewline),
            KeyCode::Backspace => Some(Intent::EditorBackspace),
            KeyCode::Char(c) if !ctrl => Some(Intent::EditorInput(c)),
            _ => None,
        },
        Screen::List { searching: true, .. } => match key.code {
            KeyCode::Esc => Some(Intent::SearchClear),
            KeyCode::Enter | KeyCode::Down => Some(Intent::SearchCommit),
            KeyCode::Backspace => Some(Intent::SearchBackspace),
            KeyCode::Char(c) if !ctrl => Some(Intent::SearchInput(c)),
            _ => None,
        },
        Screen::List {
            searching: false,
            has_query,
        } => match key.code {
            KeyCode::Esc if has_query => Some(Intent::SearchClear),
            KeyCode::Esc | KeyCode::Char('q') => Some(Intent::Quit),
            KeyCode::Down | KeyCode::Char('j') => Some(Intent::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Intent::SelectPrevious),
            KeyCode::Home | KeyCode::Char('g') => Some(Intent::SelectFirst),
            KeyCode::End | KeyCode::Char('G') => Some(Intent::SelectLast),
            KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Char('+') => Some(Intent::OpenCreate),
            KeyCode::Enter | KeyCode::Char('e') => Some(Intent::OpenEdit),
            KeyCode::Delete | KeyCode::Char('d') => Some(Intent::Delete),
            KeyCode::Char(' ') | KeyCode::Char('s') => Some(Intent::ToggleStar),
            KeyCode::Char('t') => Some(Intent::ToggleTheme),
            KeyCode::Char('/') => Some(Intent::StartSearch),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROWSING: Screen = Screen::List {
        searching: false,
        has_query: false,
    };
    const SEARCHING: Screen = Screen::List {
        searching: true,
        has_query: true,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for screen in [BROWSING, SEARCHING, Screen::Editor] {
            assert_eq!(map_key(ctrl('c'), screen), Some(Intent::Quit));
        }
    }

    #[test]
    fn test_list_bindings() {
        assert_eq!(map_key(key(KeyCode::Char('a')), BROWSING), Some(Intent::OpenCreate));
        assert_eq!(map_key(key(KeyCode::Enter), BROWSING), Some(Intent::OpenEdit));
        assert_eq!(map_key(key(KeyCode::Char('d')), BROWSING), Some(Intent::Delete));
        assert_eq!(map_key(key(KeyCode::Char(' ')), BROWSING), Some(Intent::ToggleStar));
        assert_eq!(map_key(key(KeyCode::Char('t')), BROWSING), Some(Intent::ToggleTheme));
        assert_eq!(map_key(key(KeyCode::Char('/')), BROWSING), Some(Intent::StartSearch));
        assert_eq!(map_key(key(KeyCode::Char('j')), BROWSING), Some(Intent::SelectNext));
        assert_eq!(map_key(key(KeyCode::Char('x')), BROWSING), None);
    }

    #[test]
    fn test_esc_clears_query_before_quitting() {
        let with_query = Screen::List {
            searching: false,
            has_query: true,
        };
        assert_eq!(map_key(key(KeyCode::Esc), with_query), Some(Intent::SearchClear));
        assert_eq!(map_key(key(KeyCode::Esc), BROWSING), Some(Intent::Quit));
    }

    #[test]
    fn test_search_bindings() {
        assert_eq!(map_key(key(KeyCode::Char('q')), SEARCHING), Some(Intent::SearchInput('q')));
        assert_eq!(map_key(key(KeyCode::Backspace), SEARCHING), Some(Intent::SearchBackspace));
        assert_eq!(map_key(key(KeyCode::Enter), SEARCHING), Some(Intent::SearchCommit));
        assert_eq!(map_key(key(KeyCode::Esc), SEARCHING), Some(Intent::SearchClear));
    }

    #[test]
    fn test_editor_bindings() {
        let editor = Screen::Editor;
        assert_eq!(map_key(ctrl('s'), editor), Some(Intent::EditorSave));
        assert_eq!(map_key(key(KeyCode::Char('s')), editor), Some(Intent::EditorInput('s')));
        assert_eq!(map_key(key(KeyCode::Esc), editor), Some(Intent::EditorCancel));
        assert_eq!(map_key(key(KeyCode::Tab), editor), Some(Intent::EditorSwitchField));
        assert_eq!(map_key(key(KeyCode::BackTab), editor), Some(Intent::EditorSwitchField));
        assert_eq!(map_key(key(KeyCode::Enter), editor), Some(Intent::EditorNewline));
        assert_eq!(map_key(ctrl('x'), editor), None);
    }
}
