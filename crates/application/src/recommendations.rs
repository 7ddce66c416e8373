//! Heuristic recommendations around a base listing.

use rand::Rng;
use serde::Serialize;
use tracing::instrument;

use catalog_items::{Item, ItemRepository};

use crate::dto::{thumbnail_url, PriceDto};

/// Largest score handed out; scores never reach 1.0.
const MAX_SCORE: f64 = 1.0 - f64::EPSILON;

/// Source of uniformly distributed values in `[0, 1)` for confidence scores.
pub trait ScoreSource: Send + Sync {
    fn next_unit(&self) -> f64;
}

/// Scores drawn from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngScores;

impl ScoreSource for ThreadRngScores {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

impl<F> ScoreSource for F
where
    F: Fn() -> f64 + Send + Sync,
{
    fn next_unit(&self) -> f64 {
        self()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedItemDto {
    pub id: String,
    pub title: String,
    pub price: PriceDto,
    pub thumbnail_url: Option<String>,
    pub condition: String,
    pub free_shipping: bool,
    pub sold_quantity: u32,
    pub recommendation_reason: String,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResponse {
    pub recommended_items: Vec<RecommendedItemDto>,
    pub recommendation_type: String,
    pub base_item_id: String,
}

/// Kind of recommendation, with its reason text and score floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Similar,
    BoughtTogether,
    AlsoViewed,
}

impl Kind {
    fn type_name(self) -> &'static str {
        match self {
            Self::Similar => "similar_items",
            Self::BoughtTogether => "frequently_bought_together",
            Self::AlsoViewed => "also_viewed",
        }
    }

    fn reason(self) -> &'static str {
        match self {
            Self::Similar => "Similar category",
            Self::BoughtTogether => "Frequently bought together",
            Self::AlsoViewed => "Also viewed by other customers",
        }
    }

    /// Scores fall in `[floor, 1.0)`.
    fn floor(self) -> f64 {
        match self {
            Self::Similar => 0.7,
            Self::BoughtTogether => 0.6,
            Self::AlsoViewed => 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationService<R, S = ThreadRngScores> {
    repository: R,
    scores: S,
}

impl<R: ItemRepository> RecommendationService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_scores(repository, ThreadRngScores)
    }
}

impl<R: ItemRepository, S: ScoreSource> RecommendationService<R, S> {
    pub fn with_scores(repository: R, scores: S) -> Self {
        Self { repository, scores }
    }

    #[instrument(skip(self))]
    pub fn similar_items(&self, item_id: &str, limit: usize) -> RecommendationResponse {
        let items = self.repository.find_similar_items(item_id, limit);
        self.respond(item_id, items, Kind::Similar)
    }

    /// Uses the same-category heuristic as [`Self::similar_items`].
    #[instrument(skip(self))]
    pub fn frequently_bought_together(&self, item_id: &str, limit: usize) -> RecommendationResponse {
        let items = self.repository.find_similar_items(item_id, limit);
        self.respond(item_id, items, Kind::BoughtTogether)
    }

    /// Best sellers other than the base item; may return fewer than `limit`.
    #[instrument(skip(self))]
    pub fn also_viewed(&self, item_id: &str, limit: usize) -> RecommendationResponse {
        let items = self
            .repository
            .find_best_sellers(limit)
            .into_iter()
            .filter(|item| item.id() != item_id)
            .collect();
        self.respond(item_id, items, Kind::AlsoViewed)
    }

    fn respond(&self, item_id: &str, items: Vec<Item>, kind: Kind) -> RecommendationResponse {
        tracing::debug!(count = items.len(), kind = kind.type_name(), "recommendations resolved");
        RecommendationResponse {
            recommended_items: items.iter().map(|item| self.recommend(item, kind)).collect(),
            recommendation_type: kind.type_name().to_string(),
            base_item_id: item_id.to_string(),
        }
    }

    fn recommend(&self, item: &Item, kind: Kind) -> RecommendedItemDto {
        let floor = kind.floor();
        let unit = self.scores.next_unit().clamp(0.0, 1.0);
        let score = (floor + unit * (1.0 - floor)).min(MAX_SCORE);

        RecommendedItemDto {
            id: item.id().to_string(),
            title: item.title().to_string(),
            price: item.price().into(),
            thumbnail_url: thumbnail_url(item),
            condition: item.condition().to_string(),
            free_shipping: item.has_free_shipping(),
            sold_quantity: item.sold_quantity(),
            recommendation_reason: kind.reason().to_string(),
            confidence_score: score,
        }
    }
}
