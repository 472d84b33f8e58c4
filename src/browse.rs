//! # Browse Pipeline Module
//!
//! Runs one catalog selection end to end: query, shape, partition, deliver.
//! Each stage is awaited before the next one starts and albums are sent one at
//! a time. A failed send stops the run; nothing is retried.

use std::future::Future;

use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};
use tracing::{debug, info};

use crate::album::{partition_albums, AlbumBatch, AlbumPayload};
use crate::catalog::{CatalogRequest, CatalogSource};
use crate::catalog_errors::CatalogError;
use crate::presentation::shape_results;

/// Channel that can deliver a photo album to a chat
pub trait AlbumDelivery {
    fn send_album(
        &self,
        chat_id: ChatId,
        batch: &AlbumBatch<'_>,
    ) -> impl Future<Output = Result<(), CatalogError>> + Send;
}

impl AlbumDelivery for Bot {
    async fn send_album(
        &self,
        chat_id: ChatId,
        batch: &AlbumBatch<'_>,
    ) -> Result<(), CatalogError> {
        match batch.to_payload()? {
            AlbumPayload::Photo { url, caption } => {
                self.send_photo(chat_id, InputFile::url(url))
                    .caption(caption)
                    .parse_mode(ParseMode::Html)
                    .await?;
            }
            AlbumPayload::Group(media) => {
                self.send_media_group(chat_id, media).await?;
            }
        }
        Ok(())
    }
}

/// Fetch, shape and deliver one selection
///
/// Returns the number of albums sent, or [`CatalogError::EmptyResult`] when
/// no item survived filtering, in which case nothing is delivered.
pub async fn browse_catalog<C, D>(
    catalog: &C,
    delivery: &D,
    chat_id: ChatId,
    request: &CatalogRequest,
    image_base_url: &str,
) -> Result<usize, CatalogError>
where
    C: CatalogSource + Sync,
    D: AlbumDelivery + Sync,
{
    let items = catalog.discover(request).await?;
    let entries = shape_results(&items, request.count, image_base_url);
    debug!(
        chat_id = %chat_id,
        raw_items = items.len(),
        entries = entries.len(),
        "Catalog results shaped"
    );

    if entries.is_empty() {
        return Err(CatalogError::EmptyResult);
    }

    let mut sent = 0;
    for batch in partition_albums(&entries) {
        delivery.send_album(chat_id, &batch).await?;
        sent += 1;
    }

    info!(chat_id = %chat_id, albums = sent, entries = entries.len(), "Albums delivered");
    Ok(sent)
}
