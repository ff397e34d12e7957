//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Screen draw functions (list, editor)
//! - `theme.rs` - Color themes and presets
//! - `layout.rs` - Card list layout
//! - `entry_card.rs` - Entry card widget

mod draw;
pub mod entry_card;
pub mod layout;
pub mod theme;

// Re-export main draw function
pub use draw::draw;
