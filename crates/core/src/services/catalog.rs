//! Contest catalog service.
//!
//! Serves the item listing with derived tallies. The listing degrades
//! rather than fails: if the tally aggregate cannot be read, every item
//! is served with a zero tally so the page stays up.

use promovote_common::AppResult;
use promovote_db::{
    entities::contest_item,
    repositories::{ContestItemRepository, VoteRepository},
};
use serde::Serialize;
use std::collections::HashMap;

/// A contest item with its current tally.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemWithTally {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub media_url: String,
    pub hls_url: Option<String>,
    pub tally: i64,
}

/// Catalog listing with a degradation marker.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub items: Vec<ItemWithTally>,
    /// True when tallies could not be read and are reported as zero.
    pub degraded: bool,
}

/// Catalog service.
#[derive(Clone)]
pub struct CatalogService {
    item_repo: ContestItemRepository,
    vote_repo: VoteRepository,
}

impl CatalogService {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(item_repo: ContestItemRepository, vote_repo: VoteRepository) -> Self {
        Self {
            item_repo,
            vote_repo,
        }
    }

    /// List all contest items with tallies, in id order.
    pub async fn list_with_tallies(&self) -> AppResult<CatalogView> {
        let items = self.item_repo.find_all().await?;

        let (tallies, degraded) = match self.vote_repo.tally_by_item().await {
            Ok(rows) => (rows.into_iter().collect::<HashMap<i32, i64>>(), false),
            Err(e) => {
                tracing::warn!(error = %e, "Tally aggregate failed; serving zero tallies");
                (HashMap::new(), true)
            }
        };

        let items = items
            .into_iter()
            .map(|item| to_view(item, &tallies))
            .collect();

        Ok(CatalogView { items, degraded })
    }

    /// A single item with its tally.
    pub async fn get_with_tally(&self, item_id: i32) -> AppResult<ItemWithTally> {
        let item = self.item_repo.get_by_id(item_id).await?;
        let tally = self.vote_repo.count_for_item(item_id).await?;

        #[allow(clippy::cast_possible_wrap)]
        Ok(ItemWithTally {
            id: item.id,
            title: item.title,
            description: item.description,
            media_url: item.media_url,
            hls_url: item.hls_url,
            tally: tally as i64,
        })
    }
}

fn to_view(item: contest_item::Model, tallies: &HashMap<i32, i64>) -> ItemWithTally {
    let tally = tallies.get(&item.id).copied().unwrap_or(0);
    ItemWithTally {
        id: item.id,
        title: item.title,
        description: item.description,
        media_url: item.media_url,
        hls_url: item.hls_url,
        tally,
    }
}
