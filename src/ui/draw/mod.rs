//! Drawing functions for the TUI
//!
//! This module contains all rendering logic, split by mode:
//! - `list` - Main screen (header, search, entry cards, status)
//! - `editor` - Create/edit form

mod editor;
mod list;

use ratatui::Frame;

use crate::app::App;

use editor::draw_editor;
use list::draw_list;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    // Palette is picked once per frame and passed down explicitly
    let theme = app.theme();
    match app.editor() {
        Some(editor) => draw_editor(f, app, editor, theme),
        None => draw_list(f, app, theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Intent;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn screen_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    fn app_with_entry() -> App {
        let mut app = App::new(Config::default());
        app.apply(Intent::OpenCreate);
        for c in "Trip".chars() {
            app.apply(Intent::EditorInput(c));
        }
        app.apply(Intent::EditorSwitchField);
        for c in "Went to the lake".chars() {
            app.apply(Intent::EditorInput(c));
        }
        app.apply(Intent::EditorSave);
        app
    }

    #[test]
    fn test_empty_list_screen() {
        let app = App::new(Config::default());
        let text = render(&app);
        assert!(text.contains("MY DIARY"));
        assert!(text.contains("by MMONEN KHIEN AGDORO"));
        assert!(text.contains("Search"));
        assert!(text.contains("No entries yet"));
    }

    #[test]
    fn test_list_shows_cards() {
        let app = app_with_entry();
        let text = render(&app);
        assert!(text.contains("Trip"));
        assert!(text.contains("Went to the lake"));
        assert!(text.contains("Entry saved"));
    }

    #[test]
    fn test_no_match_message() {
        let mut app = app_with_entry();
        app.apply(Intent::StartSearch);
        for c in "mountain".chars() {
            app.apply(Intent::SearchInput(c));
        }
        let text = render(&app);
        assert!(text.contains("mountain"));
        assert!(text.contains("No entries match"));
        assert!(!text.contains("Went to the lake"));
    }

    #[test]
    fn test_editor_screen() {
        let mut app = app_with_entry();
        app.apply(Intent::OpenEdit);
        let text = render(&app);
        assert!(text.contains("‹ MY DIARY"));
        assert!(text.contains("Trip"));
        assert!(text.contains("Went to the lake"));
        assert!(text.contains("Save"));
        assert!(text.contains("editing"));
    }

    #[test]
    fn test_editor_placeholders() {
        let mut app = App::new(Config::default());
        app.apply(Intent::OpenCreate);
        let text = render(&app);
        assert!(text.contains("Title"));
        assert!(text.contains("Dear Diary..."));
        assert!(text.contains("new entry"));
    }

    #[test]
    fn test_theme_background_follows_flag() {
        let mut app = App::new(Config::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal.draw(|f| draw(f, &app)).unwrap();
        let light_bg = terminal.backend().buffer()[(0, 0)].bg;
        assert_eq!(light_bg, app.theme().background);

        app.apply(Intent::ToggleTheme);
        terminal.draw(|f| draw(f, &app)).unwrap();
        let dark_bg = terminal.backend().buffer()[(0, 0)].bg;
        assert_eq!(dark_bg, app.theme().background);
        assert_ne!(light_bg, dark_bg);
    }
}
