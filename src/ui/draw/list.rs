//! List screen drawing functions
//!
//! This module handles rendering the main screen:
//! - Header with theme toggle
//! - Search bar
//! - Entry cards
//! - Status bar with the add affordance

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::entry_card::{truncate, EntryCard};
use crate::ui::theme::Theme;

const SEARCH_ICON: &str = "⌕ ";
const ADD_BUTTON: &str = " + New (a) ";

/// Draw the list screen
pub(crate) fn draw_list(f: &mut Frame, app: &App, theme: &Theme) {
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(1),    // Entry list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, app, chunks[0], theme);
    draw_search_bar(f, app, chunks[1], theme);
    draw_entry_list(f, app, chunks[2], theme);
    draw_status_bar(f, app, chunks[3], theme);
}

/// Title, subtitle and the sun/moon toggle
fn draw_header(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let appearance = &app.config().appearance;
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(1),
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            appearance.title.as_str(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            appearance.subtitle.as_str(),
            Style::default().fg(theme.dimmed),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme.background)),
        inner,
    );

    let (glyph, glyph_fg) = if app.theme_mode().is_dark() {
        (" ☾ ", theme.foreground)
    } else {
        (" ☀ ", theme.foreground)
    };
    let toggle_width = glyph.width() as u16;
    if inner.width > toggle_width {
        let toggle_area = Rect {
            x: inner.x + inner.width - toggle_width,
            y: inner.y,
            width: toggle_width,
            height: 1,
        };
        let toggle = Paragraph::new(glyph).style(Style::default().fg(glyph_fg).bg(theme.toggle_bg));
        f.render_widget(toggle, toggle_area);
    }
}

/// Draw the search bar
fn draw_search_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let area = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };

    let (text, style) = if app.query().is_empty() && !app.is_searching() {
        (
            format!("{}Search", SEARCH_ICON),
            Style::default().fg(theme.placeholder).bg(theme.surface),
        )
    } else {
        (
            format!("{}{}", SEARCH_ICON, app.query()),
            Style::default().fg(theme.foreground).bg(theme.surface),
        )
    };

    let border = if app.is_searching() {
        theme.accent
    } else {
        theme.border
    };

    let search = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.surface)),
    );
    f.render_widget(search, area);

    if app.is_searching() {
        // +1 for the border on the left side of the block
        let cursor_x = area.x + 1 + SEARCH_ICON.width() as u16 + app.query().width() as u16;
        let cursor_x = cursor_x.min(area.x + area.width.saturating_sub(2));
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

/// Draw the visible page of entry cards
fn draw_entry_list(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(1),
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let entries = app.visible_entries();
    if entries.is_empty() {
        let message = if app.journal().is_empty() {
            "No entries yet. Press a to write one.".to_string()
        } else {
            format!("No entries match \"{}\"", app.query())
        };
        let empty = Paragraph::new(truncate(&message, inner.width as usize))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.dimmed).bg(theme.background));
        f.render_widget(empty, Rect { height: 1, ..inner });
        return;
    }

    let appearance = &app.config().appearance;
    let card_config = app.config().card_display_config();
    let layout = app.list_layout();
    let selected = app.selected_index();
    let range = layout.visible_range(selected, entries.len(), inner.height);
    let page_start = range.start;

    for (slot, entry) in entries[range].iter().enumerate() {
        let Some(card_area) = layout.card_area(inner, slot) else {
            break;
        };
        let card = EntryCard::new(entry, theme)
            .selected(page_start + slot == selected)
            .config(card_config)
            .star_glyphs(&appearance.star, &appearance.unstar);
        f.render_widget(card, card_area);
    }
}

/// Status message or counts on the left, add button on the right
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let total = app.visible_entries().len();
    let list_height = area_height_for_list(f.area().height);
    let (page, pages) = app
        .list_layout()
        .page_info(app.selected_index(), total, list_height);

    let left = match app.status() {
        Some(status) => format!(" {}", status),
        None if app.is_searching() => {
            format!(" {} matches | Enter: done | Esc: clear", total)
        }
        None => format!(
            " {}/{} | Page {}/{} | j/k: nav | e: edit | d: delete | s: star | /: search | t: theme | q: quit",
            if total == 0 { 0 } else { app.selected_index() + 1 },
            total,
            page,
            pages
        ),
    };

    let button_width = (ADD_BUTTON.width() as u16).min(area.width);
    let left_width = area.width.saturating_sub(button_width);

    let status_style = if app.status().is_some() {
        Style::default().fg(theme.accent).bg(theme.background)
    } else {
        Style::default().fg(theme.dimmed).bg(theme.background)
    };
    let status_bar = Paragraph::new(truncate(&left, left_width as usize)).style(status_style);
    f.render_widget(status_bar, Rect { width: left_width, ..area });

    let button = Paragraph::new(ADD_BUTTON).style(
        Style::default()
            .fg(theme.on_accent)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(
        button,
        Rect {
            x: area.x + left_width,
            width: button_width,
            ..area
        },
    );
}

/// Lines available to cards for a screen of `height` lines
fn area_height_for_list(height: u16) -> u16 {
    // header + search + status, then the top gap inside the list area
    height.saturating_sub(3 + 3 + 1 + 1)
}
