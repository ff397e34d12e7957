//! Card list layout
//!
//! Provides:
//! - Vertical stacking of fixed-height cards with a gap
//! - Pagination that keeps the selected card on screen

use ratatui::layout::Rect;
use std::ops::Range;

/// Layout of a vertical card list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    /// Height of one card in lines
    pub card_height: u16,
    /// Blank lines between cards
    pub gap: u16,
}

impl Default for ListLayout {
    fn default() -> Self {
        Self {
            card_height: 3,
            gap: 1,
        }
    }
}

impl ListLayout {
    pub fn new(card_height: u16, gap: u16) -> Self {
        Self {
            card_height: card_height.max(1),
            gap,
        }
    }

    /// Number of whole cards that fit into `height` lines (at least one)
    pub fn visible_count(&self, height: u16) -> usize {
        let stride = self.card_height + self.gap;
        // The last card needs no trailing gap
        let count = (height + self.gap) / stride;
        (count as usize).max(1)
    }

    /// Calculate the range of cards visible for a given selection.
    /// Returns the start..end indices of cards to display.
    pub fn visible_range(&self, selected: usize, total: usize, height: u16) -> Range<usize> {
        if total == 0 {
            return 0..0;
        }

        let page_size = self.visible_count(height);
        let page = selected.min(total - 1) / page_size;
        let start = page * page_size;
        let end = (start + page_size).min(total);
        start..end
    }

    /// Area of the card at `slot` (0-based position on the current page)
    pub fn card_area(&self, inner: Rect, slot: usize) -> Option<Rect> {
        let stride = (self.card_height + self.gap) as usize;
        let offset = u16::try_from(slot * stride).ok()?;
        let y = inner.y.checked_add(offset)?;
        if y + self.card_height > inner.y + inner.height {
            return None;
        }
        Some(Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: self.card_height,
        })
    }

    /// Current page (1-based) and page count for the status bar
    pub fn page_info(&self, selected: usize, total: usize, height: u16) -> (usize, usize) {
        let page_size = self.visible_count(height);
        let pages = total.div_ceil(page_size).max(1);
        let page = (selected.min(total.saturating_sub(1)) / page_size) + 1;
        (page, pages)
    }
}
