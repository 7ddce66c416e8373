use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::sync::RwLock;

use catalog_items::{
    search, Item, ItemRepository, SearchCriteria, SearchPage, SellerId, SortDirection, SortField,
};

/// Item store backed by a vector; listing queries run the shared search pipeline
/// or an equivalent filter/sort over active items.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    inner: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            inner: RwLock::new(items),
        }
    }

    /// Insert or replace an item by id.
    pub fn upsert(&self, item: Item) {
        if let Ok(mut items) = self.inner.write() {
            match items.iter_mut().find(|existing| existing.id() == item.id()) {
                Some(existing) => *existing = item,
                None => items.push(item),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn active_where(&self, keep: impl Fn(&Item) -> bool) -> Vec<Item> {
        let items = match self.inner.read() {
            Ok(items) => items,
            Err(_) => return vec![],
        };

        items
            .iter()
            .filter(|item| item.is_active() && keep(item))
            .cloned()
            .collect()
    }
}

fn page(items: Vec<Item>, limit: usize, offset: usize) -> Vec<Item> {
    items.into_iter().skip(offset).take(limit).collect()
}

fn by_sold_desc(items: &mut [Item]) {
    items.sort_by_key(|item| Reverse(item.sold_quantity()));
}

/// Newest first; undated items go last.
fn by_created_desc(items: &mut [Item]) {
    items.sort_by_key(|item| Reverse(item.created_date()));
}

impl ItemRepository for InMemoryItemRepository {
    fn find_by_id(&self, id: &str) -> Option<Item> {
        let items = self.inner.read().ok()?;
        items.iter().find(|item| item.id() == id).cloned()
    }

    fn search(&self, criteria: &SearchCriteria) -> SearchPage {
        match self.inner.read() {
            Ok(items) => search::execute(items.iter(), criteria),
            Err(_) => SearchPage {
                items: vec![],
                total: 0,
            },
        }
    }

    fn count_matches(&self, criteria: &SearchCriteria) -> usize {
        match self.inner.read() {
            Ok(items) => search::count_matches(items.iter(), criteria),
            Err(_) => 0,
        }
    }

    fn find_best_sellers(&self, limit: usize) -> Vec<Item> {
        let mut items = self.active_where(|_| true);
        by_sold_desc(&mut items);
        page(items, limit, 0)
    }

    fn find_trending_by_category(&self, category_id: &str, limit: usize) -> Vec<Item> {
        let mut items = self.active_where(|item| item.category().id() == category_id);
        // Relevance is sold quantity then creation date, both descending.
        search::sort(&mut items, SortField::Relevance, SortDirection::Descending);
        page(items, limit, 0)
    }

    fn find_similar_items(&self, item_id: &str, limit: usize) -> Vec<Item> {
        let Some(category_id) = self
            .find_by_id(item_id)
            .map(|item| item.category().id().to_string())
        else {
            return vec![];
        };

        let mut items =
            self.active_where(|item| item.id() != item_id && item.category().id() == category_id);
        by_sold_desc(&mut items);
        page(items, limit, 0)
    }

    fn find_by_category(&self, category_id: &str, limit: usize, offset: usize) -> Vec<Item> {
        let mut items = self.active_where(|item| item.category().id() == category_id);
        by_created_desc(&mut items);
        page(items, limit, offset)
    }

    fn find_by_seller(&self, seller_id: SellerId, limit: usize, offset: usize) -> Vec<Item> {
        let mut items = self.active_where(|item| item.seller().id() == seller_id);
        by_created_desc(&mut items);
        page(items, limit, offset)
    }

    fn distinct_attribute_values(&self, attribute_id: &str, category_id: Option<&str>) -> Vec<String> {
        let items = self.active_where(|item| category_id.is_none_or(|id| item.category().id() == id));

        items
            .iter()
            .filter_map(|item| item.attribute(attribute_id))
            .map(|attribute| attribute.value().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_items::{
        build_criteria, Category, ItemAttribute, NewItem, NewSeller, Price, SearchRequest, Seller,
    };
    use chrono::{TimeZone, Utc};

    fn seller(id: u64) -> Seller {
        Seller::new(NewSeller {
            id,
            nickname: format!("SELLER_{id}"),
            ..NewSeller::default()
        })
        .unwrap()
    }

    fn item(id: &str, category: &str, sold: u32, day: u32, seller_id: u64) -> Item {
        Item::new(NewItem {
            id: id.into(),
            title: format!("Item {id}"),
            price: Price::of_minor_units(10_000, "ARS", 2).unwrap(),
            condition: "new".into(),
            available_quantity: Some(5),
            sold_quantity: Some(sold),
            permalink: None,
            status: None,
            description: None,
            listing_type_id: None,
            buying_mode: None,
            free_shipping: false,
            local_pick_up: false,
            created_date: Some(Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap()),
            last_updated: None,
            category: Category::new(category, "Category", None).unwrap(),
            seller: seller(seller_id),
            attributes: vec![],
            pictures: vec![],
            shipping_methods: vec![],
            payment_method: None,
            warranty: None,
        })
        .unwrap()
    }

    fn with_brand(item: Item, brand: &str) -> Item {
        let mut new = NewItem {
            id: item.id().into(),
            title: item.title().into(),
            price: item.price().clone(),
            condition: item.condition().into(),
            available_quantity: Some(item.available_quantity()),
            sold_quantity: Some(item.sold_quantity()),
            permalink: None,
            status: None,
            description: None,
            listing_type_id: None,
            buying_mode: None,
            free_shipping: false,
            local_pick_up: false,
            created_date: item.created_date(),
            last_updated: None,
            category: item.category().clone(),
            seller: item.seller().clone(),
            attributes: vec![],
            pictures: vec![],
            shipping_methods: vec![],
            payment_method: None,
            warranty: None,
        };
        new.attributes
            .push(ItemAttribute::new("BRAND", "Marca", brand, None, "string").unwrap());
        Item::new(new).unwrap()
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(Item::id).collect()
    }

    fn repository() -> InMemoryItemRepository {
        InMemoryItemRepository::new(vec![
            with_brand(item("A", "PHONES", 10, 1, 1), "Samsung"),
            with_brand(item("B", "PHONES", 30, 2, 1), "Apple"),
            with_brand(item("C", "PHONES", 30, 5, 2), "Samsung"),
            item("D", "PHONES", 99, 9, 2).with_status("paused").unwrap(),
            with_brand(item("E", "LAPTOPS", 20, 3, 1), "Lenovo"),
        ])
    }

    #[test]
    fn best_sellers_skip_inactive_items() {
        let repo = repository();
        assert_eq!(ids(&repo.find_best_sellers(10)), ["B", "C", "E", "A"]);
        assert_eq!(ids(&repo.find_best_sellers(2)), ["B", "C"]);
    }

    #[test]
    fn trending_breaks_sales_ties_by_newest() {
        let repo = repository();
        assert_eq!(ids(&repo.find_trending_by_category("PHONES", 10)), ["C", "B", "A"]);
    }

    #[test]
    fn similar_items_share_the_category_and_exclude_the_source() {
        let repo = repository();
        assert_eq!(ids(&repo.find_similar_items("A", 10)), ["B", "C"]);
        assert!(repo.find_similar_items("missing", 10).is_empty());
    }

    #[test]
    fn category_and_seller_listings_are_newest_first() {
        let repo = repository();
        assert_eq!(ids(&repo.find_by_category("PHONES", 10, 0)), ["C", "B", "A"]);
        assert_eq!(ids(&repo.find_by_category("PHONES", 1, 1)), ["B"]);
        assert_eq!(ids(&repo.find_by_seller(SellerId::new(1).unwrap(), 10, 0)), ["E", "B", "A"]);
    }

    #[test]
    fn find_by_id_returns_inactive_items_too() {
        let repo = repository();
        assert_eq!(repo.find_by_id("D").map(|i| i.status().to_string()), Some("paused".into()));
        assert!(repo.find_by_id("Z").is_none());
    }

    #[test]
    fn distinct_attribute_values_are_sorted_and_scoped() {
        let repo = repository();
        assert_eq!(
            repo.distinct_attribute_values("BRAND", None),
            ["Apple", "Lenovo", "Samsung"]
        );
        assert_eq!(
            repo.distinct_attribute_values("BRAND", Some("PHONES")),
            ["Apple", "Samsung"]
        );
        assert!(repo.distinct_attribute_values("COLOR", None).is_empty());
    }

    #[test]
    fn search_total_matches_count() {
        let repo = repository();
        let criteria = build_criteria(SearchRequest {
            category: Some("PHONES".into()),
            limit: Some(2),
            ..SearchRequest::default()
        });
        let page = repo.search(&criteria);
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(repo.count_matches(&criteria), page.total);
    }

    #[test]
    fn upsert_replaces_existing_items() {
        let repo = repository();
        let paused = repo.find_by_id("A").unwrap().with_status("paused").unwrap();
        repo.upsert(paused);
        assert_eq!(repo.len(), 5);
        assert_eq!(ids(&repo.find_best_sellers(10)), ["B", "C", "E"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 64,
                .. ProptestConfig::default()
            })]

            #[test]
            fn listings_never_return_inactive_items(
                specs in proptest::collection::vec((0u32..500, 1u32..28, any::<bool>()), 0..30),
                limit in 1usize..20,
                offset in 0usize..10,
            ) {
                let items = specs
                    .iter()
                    .enumerate()
                    .map(|(i, (sold, day, active))| {
                        let item = item(&format!("MLA{i}"), "PHONES", *sold, *day, 1);
                        if *active { item } else { item.with_status("closed").unwrap() }
                    })
                    .collect();
                let repo = InMemoryItemRepository::new(items);

                let page = repo.search(&build_criteria(SearchRequest {
                    limit: Some(limit),
                    offset: Some(offset),
                    ..SearchRequest::default()
                }));
                prop_assert!(page.items.len() <= limit);
                prop_assert!(page.items.iter().all(Item::is_active));
                prop_assert!(repo.find_best_sellers(limit).iter().all(Item::is_active));
                prop_assert!(repo.find_by_category("PHONES", limit, offset).iter().all(Item::is_active));

                let sold: Vec<u32> = repo.find_best_sellers(100).iter().map(Item::sold_quantity).collect();
                prop_assert!(sold.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }
}
