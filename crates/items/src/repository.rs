use std::sync::Arc;

use crate::criteria::SearchCriteria;
use crate::item::Item;
use crate::search::SearchPage;
use crate::seller::SellerId;

/// Item lookup/query port implemented by persistence adapters.
///
/// Every listing query (everything except `find_by_id`) only returns active items.
pub trait ItemRepository: Send + Sync {
    fn find_by_id(&self, id: &str) -> Option<Item>;

    /// Filtered, sorted page for `criteria` together with the unpaginated total.
    fn search(&self, criteria: &SearchCriteria) -> SearchPage;

    fn count_matches(&self, criteria: &SearchCriteria) -> usize;

    /// Ordered by sold quantity, descending.
    fn find_best_sellers(&self, limit: usize) -> Vec<Item>;

    /// Ordered by sold quantity, then creation date, both descending.
    fn find_trending_by_category(&self, category_id: &str, limit: usize) -> Vec<Item>;

    /// Items in the same category as `item_id`, excluding it.
    fn find_similar_items(&self, item_id: &str, limit: usize) -> Vec<Item>;

    fn find_by_category(&self, category_id: &str, limit: usize, offset: usize) -> Vec<Item>;

    fn find_by_seller(&self, seller_id: SellerId, limit: usize, offset: usize) -> Vec<Item>;

    /// Sorted distinct values of an attribute, optionally scoped to a category.
    fn distinct_attribute_values(&self, attribute_id: &str, category_id: Option<&str>) -> Vec<String>;
}

impl<R> ItemRepository for Arc<R>
where
    R: ItemRepository + ?Sized,
{
    fn find_by_id(&self, id: &str) -> Option<Item> {
        (**self).find_by_id(id)
    }

    fn search(&self, criteria: &SearchCriteria) -> SearchPage {
        (**self).search(criteria)
    }

    fn count_matches(&self, criteria: &SearchCriteria) -> usize {
        (**self).count_matches(criteria)
    }

    fn find_best_sellers(&self, limit: usize) -> Vec<Item> {
        (**self).find_best_sellers(limit)
    }

    fn find_trending_by_category(&self, category_id: &str, limit: usize) -> Vec<Item> {
        (**self).find_trending_by_category(category_id, limit)
    }

    fn find_similar_items(&self, item_id: &str, limit: usize) -> Vec<Item> {
        (**self).find_similar_items(item_id, limit)
    }

    fn find_by_category(&self, category_id: &str, limit: usize, offset: usize) -> Vec<Item> {
        (**self).find_by_category(category_id, limit, offset)
    }

    fn find_by_seller(&self, seller_id: SellerId, limit: usize, offset: usize) -> Vec<Item> {
        (**self).find_by_seller(seller_id, limit, offset)
    }

    fn distinct_attribute_values(&self, attribute_id: &str, category_id: Option<&str>) -> Vec<String> {
        (**self).distinct_attribute_values(attribute_id, category_id)
    }
}
