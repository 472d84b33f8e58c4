//! # Presentation Module
//!
//! Turns raw catalog items into display-ready entries: items without a poster
//! are dropped, the rest are truncated to the requested count and rendered into
//! HTML captions for Telegram.

use crate::catalog::CatalogItem;
use crate::language::{language_display_name, PLACEHOLDER};

/// Escape text for Telegram's HTML parse mode
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Format a 0-10 rating with one decimal, rounding halves away from zero
pub fn format_rating(rating: Option<f64>) -> String {
    let rating = rating.filter(|r| r.is_finite()).unwrap_or(0.0);
    format!("{:.1}", (rating * 10.0).round() / 10.0)
}

/// Display-ready representation of one catalog item
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationEntry {
    /// HTML-escaped title
    pub title: String,
    /// HTML-escaped date, or the placeholder
    pub date_label: String,
    /// First four characters of the date, or the placeholder
    pub year_label: String,
    /// HTML-escaped language display name
    pub language: String,
    /// Rating with one decimal
    pub rating: String,
    /// Absolute poster URL
    pub poster_url: String,
}

impl PresentationEntry {
    /// Build an entry, or `None` when the item has no poster to show
    pub fn from_item(item: &CatalogItem, image_base_url: &str) -> Option<Self> {
        let poster = item.poster()?;
        let date = item.display_date();

        Some(Self {
            title: escape_html(item.display_title()),
            date_label: escape_html(date.unwrap_or(PLACEHOLDER)),
            year_label: date
                .map(|d| d.chars().take(4).collect())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            language: escape_html(&language_display_name(item.original_language.as_deref())),
            rating: format_rating(item.vote_average),
            poster_url: format!("{image_base_url}{poster}"),
        })
    }

    /// HTML caption attached to the photo
    pub fn caption(&self) -> String {
        format!(
            "<b>{}</b>\n📅 Release: {} ({})\n🌐 Language: {}\n⭐ Rating: {}",
            self.title, self.date_label, self.year_label, self.language, self.rating
        )
    }
}

/// Filter, truncate and render catalog items, preserving their order
pub fn shape_results(
    items: &[CatalogItem],
    count: usize,
    image_base_url: &str,
) -> Vec<PresentationEntry> {
    items
        .iter()
        .filter_map(|item| PresentationEntry::from_item(item, image_base_url))
        .take(count)
        .collect()
}
