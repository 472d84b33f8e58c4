//! Album batching for Telegram media groups.
//!
//! Telegram accepts between two and ten photos per media group, so entries are
//! split into consecutive batches of at most ten and a lone entry is sent as a
//! plain photo.

use reqwest::Url;
use teloxide::types::{InputFile, InputMedia, InputMediaPhoto, ParseMode};

use crate::catalog_errors::CatalogError;
use crate::presentation::PresentationEntry;

/// Maximum number of photos Telegram accepts in one media group
pub const MAX_ALBUM_SIZE: usize = 10;

/// What to send to Telegram for one batch
#[derive(Debug, Clone)]
pub enum AlbumPayload {
    /// A single entry, sent with `sendPhoto`
    Photo { url: Url, caption: String },
    /// Two or more entries, sent with `sendMediaGroup`
    Group(Vec<InputMedia>),
}

fn poster_url(entry: &PresentationEntry) -> Result<Url, CatalogError> {
    Url::parse(&entry.poster_url).map_err(|e| {
        CatalogError::Delivery(format!("Invalid poster URL {}: {e}", entry.poster_url))
    })
}

/// An ordered group of at most [`MAX_ALBUM_SIZE`] entries sent as one album
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumBatch<'a> {
    entries: &'a [PresentationEntry],
}

impl<'a> AlbumBatch<'a> {
    pub fn entries(&self) -> &'a [PresentationEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert the batch into Telegram photo media with HTML captions
    pub fn to_input_media(&self) -> Result<Vec<InputMedia>, CatalogError> {
        self.entries
            .iter()
            .map(|entry| {
                Ok(InputMedia::Photo(
                    InputMediaPhoto::new(InputFile::url(poster_url(entry)?))
                        .caption(entry.caption())
                        .parse_mode(ParseMode::Html),
                ))
            })
            .collect()
    }

    /// Pick the Telegram request shape for this batch
    pub fn to_payload(&self) -> Result<AlbumPayload, CatalogError> {
        match self.entries {
            [entry] => Ok(AlbumPayload::Photo {
                url: poster_url(entry)?,
                caption: entry.caption(),
            }),
            _ => Ok(AlbumPayload::Group(self.to_input_media()?)),
        }
    }
}

/// Lazily split entries into album batches, preserving order
///
/// An empty slice yields no batches.
pub fn partition_albums(
    entries: &[PresentationEntry],
) -> impl Iterator<Item = AlbumBatch<'_>> + '_ {
    entries
        .chunks(MAX_ALBUM_SIZE)
        .map(|entries| AlbumBatch { entries })
}
