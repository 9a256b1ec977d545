//! # card_renderer
//!
//! Renders GitHub user statistics as self-contained SVG cards.
//!
//! [`render_user_card`] is the entry point used by the HTTP API and the CLI. It never
//! fails: a handle whose statistics cannot be loaded yields [`render_error_card`].
//! [`render_card`] is the pure template step for callers that already hold an
//! [`statcard_core::AggregateResult`].
//!
//! Colors come from a [`Theme`]. Unknown theme names resolve to [`Theme::Dark`].

pub mod card;
pub mod formatting;
pub mod theme;

pub use card::{
    escape_xml, render_card, render_error_card, render_user_card, CARD_HEIGHT, CARD_WIDTH,
    ERROR_CARD_HEIGHT,
};
pub use formatting::format_thousands;
pub use theme::{palette_for, Palette, Theme};
