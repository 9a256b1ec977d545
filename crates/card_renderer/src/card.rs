//! SVG stat cards.
//!
//! Cards are built by filling a fixed template. The user card is a 400×200 canvas
//! with a title, a subtitle and five labelled values. The error card is a 400×120
//! canvas with a fixed message and no user data.

use statcard_core::{AggregateResult, StatsAggregator};
use tracing::{debug, warn};

use crate::formatting::format_thousands;
use crate::theme::Theme;

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;

pub const CARD_WIDTH: u32 = 400;
pub const CARD_HEIGHT: u32 = 200;
pub const ERROR_CARD_HEIGHT: u32 = 120;

const FONT_STACK: &str =
    "-apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif";

const GRADIENT_DEFS: &str = r##"<defs>
    <linearGradient id="gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#667eea" />
      <stop offset="100%" stop-color="#764ba2" />
    </linearGradient>
  </defs>"##;

/// Label and value baselines for each stat row.
const STAT_ROW_Y: [(u32, u32); 2] = [(80, 100), (140, 160)];

/// Escapes the characters that may not appear literally in SVG text or attributes.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn stat_block(label: &str, value: u64, x: u32, row: usize) -> String {
    let (label_y, value_y) = STAT_ROW_Y[row];
    format!(
        "  <text class=\"stat-label\" x=\"{x}\" y=\"{label_y}\">{label}</text>\n  \
         <text class=\"stat-value\" x=\"{x}\" y=\"{value_y}\">{}</text>\n",
        format_thousands(value)
    )
}

/// Renders the user card for `stats` in `theme`.
///
/// The title is the display name, or `handle` when the profile has none. The subtitle
/// is the biography, or "GitHub stats for @handle".
pub fn render_card(stats: &AggregateResult, handle: &str, theme: Theme) -> String {
    let palette = theme.palette();
    let user = &stats.user;

    let title = escape_xml(
        user.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(handle),
    );
    let subtitle = match user.bio.as_deref().filter(|bio| !bio.is_empty()) {
        Some(bio) => escape_xml(bio),
        None => format!("GitHub stats for @{}", escape_xml(handle)),
    };

    let defs = if theme == Theme::Gradient {
        GRADIENT_DEFS
    } else {
        ""
    };

    let mut stats_blocks = String::new();
    stats_blocks.push_str(&stat_block("Stars", stats.total_stars, 25, 0));
    stats_blocks.push_str(&stat_block("Forks", stats.total_forks, 125, 0));
    stats_blocks.push_str(&stat_block("Repositories", user.public_repos, 225, 0));
    stats_blocks.push_str(&stat_block("Followers", user.followers, 25, 1));
    stats_blocks.push_str(&stat_block("Following", user.following, 125, 1));

    format!(
        r#"<svg width="{CARD_WIDTH}" height="{CARD_HEIGHT}" viewBox="0 0 {CARD_WIDTH} {CARD_HEIGHT}" xmlns="http://www.w3.org/2000/svg">
  {defs}
  <style>
    .card {{ fill: {background}; stroke: {border}; stroke-width: 1; }}
    .title {{ fill: {title_color}; font-size: 18px; font-weight: bold; font-family: {FONT_STACK}; }}
    .stat-label {{ fill: {text_color}; font-size: 12px; font-family: {FONT_STACK}; }}
    .stat-value {{ fill: {value_color}; font-size: 16px; font-weight: bold; font-family: {FONT_STACK}; }}
  </style>
  <rect class="card" x="0" y="0" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" rx="6" />
  <text class="title" x="20" y="30">{title}</text>
  <text class="stat-label" x="20" y="50">{subtitle}</text>
{stats_blocks}</svg>
"#,
        background = palette.background,
        border = palette.border,
        title_color = palette.title,
        text_color = palette.text,
        value_color = palette.value,
    )
}

/// Renders the fixed card shown when statistics could not be loaded.
pub fn render_error_card() -> String {
    format!(
        r##"<svg width="{CARD_WIDTH}" height="{ERROR_CARD_HEIGHT}" viewBox="0 0 {CARD_WIDTH} {ERROR_CARD_HEIGHT}" xmlns="http://www.w3.org/2000/svg">
  <rect fill="#f8d7da" x="0" y="0" width="{CARD_WIDTH}" height="{ERROR_CARD_HEIGHT}" rx="6" />
  <text fill="#721c24" font-size="16" font-weight="bold" font-family="sans-serif" x="20" y="40">Error loading GitHub stats</text>
  <text fill="#721c24" font-size="14" font-family="sans-serif" x="20" y="70">Please check the username and try again.</text>
</svg>
"##
    )
}

/// Fetches statistics for `handle` and renders them as a card.
///
/// Never fails: if the statistics cannot be loaded the error card is returned and
/// the failure is logged. `theme` is resolved with [`Theme::resolve`].
pub async fn render_user_card(aggregator: &StatsAggregator, handle: &str, theme: &str) -> String {
    match aggregator.fetch_stats(handle).await {
        Ok(stats) => {
            let theme = Theme::resolve(theme);
            debug!(handle = handle, theme = %theme, "Rendering user card");
            render_card(&stats, handle, theme)
        }
        Err(e) => {
            warn!(
                handle = handle,
                error = %e,
                upstream_status = e.upstream_status(),
                "Failed to load statistics, rendering error card"
            );
            render_error_card()
        }
    }
}
