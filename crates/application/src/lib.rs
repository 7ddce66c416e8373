//! Application layer: use-case services and their response DTOs.
//!
//! Services are generic over the repository ports of the domain crates, so the
//! HTTP adapter picks the concrete persistence and tests pick the in-memory one.

pub mod comparison;
pub mod dto;
pub mod item_detail;
pub mod persons;
pub mod recommendations;
pub mod search;
pub mod seller_analytics;
pub mod trending;

pub use comparison::{ComparisonResponse, ComparisonService};
pub use dto::{FilterDto, FilterValueDto, ItemSummaryDto, PriceDto, SearchResponse, SellerSummaryDto};
pub use item_detail::{ItemDetailResponse, ItemDetailService};
pub use persons::{PersonListResponse, PersonRequest, PersonResponse, PersonService};
pub use recommendations::{
    RecommendationResponse, RecommendationService, ScoreSource, ThreadRngScores,
};
pub use search::SearchService;
pub use seller_analytics::{SellerAnalyticsResponse, SellerAnalyticsService};
pub use trending::{TrendingResponse, TrendingService};

#[cfg(test)]
pub(crate) mod test_support;
