use std::sync::Arc;

use catalog_application::{
    ComparisonService, ItemDetailService, PersonService, RecommendationService, SearchService,
    SellerAnalyticsService, TrendingService,
};
use catalog_infra::{InMemoryItemRepository, InMemoryPersonRepository, SeedError};
use catalog_items::Item;

pub type ItemStore = Arc<InMemoryItemRepository>;
pub type PersonStore = Arc<InMemoryPersonRepository>;

/// Every use case the HTTP layer can reach, sharing one item and one person store.
pub struct AppServices {
    pub item_detail: ItemDetailService<ItemStore>,
    pub search: SearchService<ItemStore>,
    pub comparison: ComparisonService<ItemStore>,
    pub recommendations: RecommendationService<ItemStore>,
    pub trending: TrendingService<ItemStore>,
    pub sellers: SellerAnalyticsService<ItemStore>,
    pub persons: PersonService<PersonStore, PersonStore>,
}

impl AppServices {
    pub fn new(items: Vec<Item>) -> Self {
        let items = Arc::new(InMemoryItemRepository::new(items));
        let persons = Arc::new(InMemoryPersonRepository::new());
        tracing::info!(items = items.len(), "catalog services ready");

        Self {
            item_detail: ItemDetailService::new(items.clone()),
            search: SearchService::new(items.clone()),
            comparison: ComparisonService::new(items.clone()),
            recommendations: RecommendationService::new(items.clone()),
            trending: TrendingService::new(items.clone()),
            sellers: SellerAnalyticsService::new(items),
            persons: PersonService::new(persons.clone(), persons),
        }
    }

    /// Services over the bundled demo catalog.
    pub fn demo() -> Result<Self, SeedError> {
        Ok(Self::new(catalog_infra::demo_catalog()?))
    }
}
