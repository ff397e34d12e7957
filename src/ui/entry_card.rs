//! Entry card widget
//!
//! Renders each diary entry as a multi-line card with:
//! - Star + Title (bold) and the date, right-aligned
//! - Content preview (dimmed)
//! - Edit/delete/star key hints (selected card only)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;
use crate::entry::DiaryEntry;

/// Key hints shown on the selected card
const ACTION_HINTS: &str = "e edit  d delete  s star";

/// Configuration for card display
#[derive(Debug, Clone, Copy)]
pub struct CardDisplayConfig {
    /// Reserve a line for the action hints
    pub show_actions: bool,
}

impl Default for CardDisplayConfig {
    fn default() -> Self {
        Self { show_actions: true }
    }
}

impl CardDisplayConfig {
    /// Calculate the height of an entry card in lines
    pub fn card_height(&self) -> u16 {
        let mut height = 2; // Title and preview always shown
        if self.show_actions {
            height += 1;
        }
        height
    }
}

/// Entry card widget
pub struct EntryCard<'a> {
    entry: &'a DiaryEntry,
    selected: bool,
    theme: &'a Theme,
    config: CardDisplayConfig,
    star: &'a str,
    unstar: &'a str,
}

impl<'a> EntryCard<'a> {
    pub fn new(entry: &'a DiaryEntry, theme: &'a Theme) -> Self {
        Self {
            entry,
            selected: false,
            theme,
            config: CardDisplayConfig::default(),
            star: "★",
            unstar: "☆",
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn config(mut self, config: CardDisplayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn star_glyphs(mut self, star: &'a str, unstar: &'a str) -> Self {
        self.star = star;
        self.unstar = unstar;
        self
    }
}

impl<'a> Widget for EntryCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let theme = self.theme;
        let bg = if self.selected { theme.selection_bg } else { theme.surface };

        // Fill background
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(bg);
                }
            }
        }

        // Selection marker in the left padding column
        if self.selected {
            let marker = Style::default().fg(theme.accent).bg(bg);
            for y in area.y..area.y + area.height {
                buf.set_string(area.x, y, "▌", marker);
            }
        }

        let padding_x = 1u16;
        let inner_width = area.width.saturating_sub(padding_x * 2);
        if inner_width == 0 {
            return;
        }

        let inner_x = area.x + padding_x;
        let max_y = area.y + area.height;
        let mut y = area.y;

        // Line 1: star, title, date on the right
        let (glyph, star_style) = if self.entry.is_starred {
            (self.star, Style::default().fg(theme.accent).bg(bg))
        } else {
            (self.unstar, Style::default().fg(theme.dimmed).bg(bg))
        };
        let glyph_width = glyph.width() as u16;
        buf.set_string(inner_x, y, glyph, star_style);

        let date_width = self.entry.date.width() as u16;
        let date_x = (inner_x + inner_width).saturating_sub(date_width);
        let title_x = inner_x + glyph_width + 1;
        let title_width = date_x.saturating_sub(title_x + 1) as usize;

        let title_style = Style::default()
            .fg(theme.foreground)
            .bg(bg)
            .add_modifier(Modifier::BOLD);
        buf.set_string(title_x, y, truncate(&self.entry.title, title_width), title_style);
        if date_x > title_x {
            let date_style = Style::default().fg(theme.dimmed).bg(bg);
            buf.set_string(date_x, y, &self.entry.date, date_style);
        }
        y += 1;

        // Line 2: preview, aligned under the title
        if y < max_y {
            let sub_width = (inner_x + inner_width).saturating_sub(title_x) as usize;
            let preview = self.entry.preview().replace('\n', " ");
            let style = Style::default().fg(theme.preview).bg(bg);
            buf.set_string(title_x, y, truncate(&preview, sub_width), style);
            y += 1;
        }

        // Line 3: action hints, right-aligned
        if self.config.show_actions && self.selected && y < max_y {
            let hints = truncate(ACTION_HINTS, inner_width as usize);
            let hints_x = (inner_x + inner_width).saturating_sub(hints.width() as u16);
            let style = Style::default().fg(theme.accent).bg(bg);
            buf.set_string(hints_x, y, hints, style);
        }
    }
}

/// Truncate string to fit within max_width, adding ellipsis if needed
pub fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        s.to_string()
    } else if max_width == 0 {
        String::new()
    } else if max_width == 1 {
        "…".to_string()
    } else {
        let mut result = String::new();
        let mut current_width = 0;

        for c in s.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width + char_width + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            current_width += char_width;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(title: &str, content: &str) -> DiaryEntry {
        DiaryEntry::new_on(title, content, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
    }

    fn render(card: EntryCard, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("hi", 2), "hi");
        assert_eq!(truncate("hello", 1), "…");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_card_height() {
        assert_eq!(CardDisplayConfig::default().card_height(), 3);
        assert_eq!(CardDisplayConfig { show_actions: false }.card_height(), 2);
    }

    #[test]
    fn test_renders_title_date_and_preview() {
        let theme = Theme::light();
        let e = entry("Trip", "Went to the lake");
        let buf = render(EntryCard::new(&e, &theme), 40, 3);

        let first = row_text(&buf, 0);
        assert!(first.contains("☆"));
        assert!(first.contains("Trip"));
        assert!(first.trim_end().ends_with("03/07/2024"));
        assert!(row_text(&buf, 1).contains("Went to the lake"));
        // Hints only on the selected card
        assert!(!row_text(&buf, 2).contains("edit"));
    }

    #[test]
    fn test_starred_and_selected() {
        let theme = Theme::dark();
        let mut e = entry("Trip", "Went to the lake");
        e.is_starred = true;
        let buf = render(EntryCard::new(&e, &theme).selected(true), 40, 3);

        assert!(row_text(&buf, 0).contains("★"));
        assert!(row_text(&buf, 2).contains("e edit  d delete  s star"));
        assert_eq!(buf[(5, 1)].bg, theme.selection_bg);
    }

    #[test]
    fn test_preview_is_cut_at_fifty_chars() {
        let theme = Theme::light();
        let content = "a".repeat(60);
        let e = entry("Long", &content);
        let buf = render(EntryCard::new(&e, &theme), 80, 3);
        let preview = row_text(&buf, 1);
        assert!(preview.contains(&format!("{}...", "a".repeat(50))));
        assert!(!preview.contains(&"a".repeat(51)));
    }

    #[test]
    fn test_narrow_area_does_not_panic() {
        let theme = Theme::light();
        let e = entry("A rather long title", "and some content");
        render(EntryCard::new(&e, &theme).selected(true), 3, 1);
        render(EntryCard::new(&e, &theme), 12, 2);
    }
}
