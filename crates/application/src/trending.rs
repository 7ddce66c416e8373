use serde::Serialize;
use tracing::instrument;

use catalog_items::{Item, ItemRepository};

use crate::dto::{thumbnail_url, PriceDto, SearchResponse};

/// Window the trending ranking refers to.
pub const TRENDING_TIME_FRAME: &str = "last_7_days";

/// Ranks up to this value are labelled top sellers.
const TOP_SELLER_RANK: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendingItemDto {
    pub id: String,
    pub title: String,
    pub price: PriceDto,
    pub thumbnail_url: Option<String>,
    pub sold_quantity: u32,
    /// 1-based.
    pub rank: usize,
    pub trending_reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendingResponse {
    pub trending_items: Vec<TrendingItemDto>,
    pub category: String,
    pub time_frame: String,
}

#[derive(Debug, Clone)]
pub struct TrendingService<R> {
    repository: R,
}

impl<R: ItemRepository> TrendingService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub fn trending_by_category(&self, category_id: &str, limit: usize) -> TrendingResponse {
        let items = self.repository.find_trending_by_category(category_id, limit);
        TrendingResponse {
            trending_items: items
                .iter()
                .enumerate()
                .map(|(index, item)| trending_item(item, index + 1))
                .collect(),
            category: category_id.to_string(),
            time_frame: TRENDING_TIME_FRAME.to_string(),
        }
    }

    #[instrument(skip(self))]
    pub fn best_sellers(&self, limit: usize) -> SearchResponse {
        let items = self.repository.find_best_sellers(limit);
        SearchResponse::listing(&items, limit, 0, "best_sellers")
    }

    /// No view tracking exists, so this ranks by sales like [`Self::best_sellers`].
    #[instrument(skip(self))]
    pub fn most_viewed(&self, limit: usize) -> SearchResponse {
        let items = self.repository.find_best_sellers(limit);
        SearchResponse::listing(&items, limit, 0, "most_viewed")
    }
}

fn trending_item(item: &Item, rank: usize) -> TrendingItemDto {
    let reason = if rank <= TOP_SELLER_RANK {
        "Top seller this week"
    } else {
        "Trending up"
    };
    TrendingItemDto {
        id: item.id().to_string(),
        title: item.title().to_string(),
        price: item.price().into(),
        thumbnail_url: thumbnail_url(item),
        sold_quantity: item.sold_quantity(),
        rank,
        trending_reason: reason.to_string(),
    }
}
