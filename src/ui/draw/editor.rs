//! Editor drawing functions
//!
//! Renders the create/edit form full-screen: back affordance, today's
//! date, the title and body fields, and the save button.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::editor::{Editor, EditorField, EditorMode};
use crate::entry::long_date_label;
use crate::ui::theme::Theme;

const TITLE_PLACEHOLDER: &str = "Title";
const CONTENT_PLACEHOLDER: &str = "Dear Diary...";
const SAVE_BUTTON: &str = " Save (Ctrl+S) ";
const EDITOR_HINTS: &str = "Esc: back | Tab: switch field";

pub(crate) fn draw_editor(f: &mut Frame, app: &App, editor: &Editor, theme: &Theme) {
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header with divider
            Constraint::Length(2), // Date label
            Constraint::Length(3), // Title field
            Constraint::Min(3),    // Body field
            Constraint::Length(1), // Save button
        ])
        .split(area);

    draw_header(f, app, chunks[0], theme);
    draw_date(f, editor, chunks[1], theme);
    draw_title_field(f, editor, chunks[2], theme);
    draw_content_field(f, editor, chunks[3], theme);
    draw_save_bar(f, editor, chunks[4], theme);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let title = &app.config().appearance.title;
    let header = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled("‹ ", Style::default().fg(theme.foreground)),
        Span::styled(
            title.as_str(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(header, area);
}

fn draw_date(f: &mut Frame, editor: &Editor, area: Rect, theme: &Theme) {
    let label = long_date_label(Local::now().date_naive());
    let kind = match editor.mode() {
        EditorMode::Create => "new entry",
        EditorMode::Edit { .. } => "editing",
    };
    let date = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("  {}", label),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", kind), Style::default().fg(theme.dimmed)),
    ]))
    .style(Style::default().bg(theme.background));
    f.render_widget(date, Rect { height: 1, ..area });
}

fn field_block(focused: bool, theme: &Theme) -> Block<'static> {
    let border = if focused { theme.accent } else { theme.border };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.surface))
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}

fn draw_title_field(f: &mut Frame, editor: &Editor, area: Rect, theme: &Theme) {
    let area = inset(area);
    let focused = editor.focus() == EditorField::Title;

    let paragraph = if editor.title().is_empty() {
        Paragraph::new(TITLE_PLACEHOLDER).style(Style::default().fg(theme.placeholder))
    } else {
        // Keep the end of a long title in view
        let inner_width = area.width.saturating_sub(2) as usize;
        let shown = tail_fit(editor.title(), inner_width.saturating_sub(1));
        Paragraph::new(shown).style(
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )
    };
    f.render_widget(paragraph.block(field_block(focused, theme)), area);

    if focused && area.width > 2 && area.height > 2 {
        let inner_width = area.width - 2;
        let typed = tail_fit(editor.title(), inner_width.saturating_sub(1) as usize).width() as u16;
        f.set_cursor_position((area.x + 1 + typed.min(inner_width - 1), area.y + 1));
    }
}

fn draw_content_field(f: &mut Frame, editor: &Editor, area: Rect, theme: &Theme) {
    let area = inset(area);
    let focused = editor.focus() == EditorField::Content;
    let block = field_block(focused, theme);
    let inner = block.inner(area);

    if editor.content().is_empty() {
        let placeholder =
            Paragraph::new(CONTENT_PLACEHOLDER).style(Style::default().fg(theme.placeholder));
        f.render_widget(placeholder.block(block), area);
        if focused && inner.width > 0 && inner.height > 0 {
            f.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let rows = hard_wrap(editor.content(), inner.width as usize);
    // Scroll so the last row (where typing happens) stays visible
    let skip = rows.len().saturating_sub(inner.height as usize);
    let lines: Vec<Line> = rows[skip..].iter().map(|r| Line::raw(r.as_str())).collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(theme.foreground))
        .block(block);
    f.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let last = rows.last().map(|r| r.width()).unwrap_or(0) as u16;
        let row = (rows.len() - skip).saturating_sub(1) as u16;
        f.set_cursor_position((inner.x + last.min(inner.width - 1), inner.y + row));
    }
}

fn draw_save_bar(f: &mut Frame, editor: &Editor, area: Rect, theme: &Theme) {
    let button_style = if editor.can_save() {
        Style::default()
            .fg(theme.on_accent)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.placeholder).bg(theme.surface)
    };
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(SAVE_BUTTON, button_style),
        Span::styled(format!("  {}", EDITOR_HINTS), Style::default().fg(theme.dimmed)),
    ]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.background)),
        area,
    );
}

/// Split text into rows no wider than `width`, breaking at newlines and
/// anywhere inside a line. A trailing newline yields an empty last row.
fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if row_width + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += w;
        }
        rows.push(row);
    }

    rows
}

/// Longest suffix of `s` that fits in `width` columns
fn tail_fit(s: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    &s[start..]
}
