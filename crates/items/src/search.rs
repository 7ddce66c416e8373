//! Filter, sort and paginate a collection of items against a [`SearchCriteria`].
//!
//! Pure functions; persistence adapters call [`execute`] over their own storage.

use core::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::criteria::{SearchCriteria, SortDirection, SortField};
use crate::item::Item;
use crate::price::Price;

/// One page of search results plus the pre-pagination match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub items: Vec<Item>,
    pub total: usize,
}

/// Pagination metadata derived from a page request and its total.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Pagination {
    pub fn new(total: usize, limit: usize, offset: usize) -> Self {
        Self {
            total,
            limit,
            offset,
            has_next: offset.saturating_add(limit) < total,
            has_previous: offset > 0,
        }
    }
}

/// Whether `item` passes every filter set on `criteria`. Inactive items never match.
pub fn matches(item: &Item, criteria: &SearchCriteria) -> bool {
    if !item.is_active() {
        return false;
    }
    if let Some(query) = &criteria.query {
        if !item.title().to_lowercase().contains(&query.to_lowercase()) {
            return false;
        }
    }
    if let Some(category_id) = &criteria.category_id {
        if item.category().id() != category_id {
            return false;
        }
    }
    let price = item.price();
    if let Some(min) = criteria.min_price {
        if price.amount_in_cents() < Price::lower_bound_in_cents(min, price.decimals()) {
            return false;
        }
    }
    if let Some(max) = criteria.max_price {
        if price.amount_in_cents() > Price::upper_bound_in_cents(max, price.decimals()) {
            return false;
        }
    }
    if let Some(condition) = &criteria.condition {
        if item.condition() != condition {
            return false;
        }
    }
    if criteria.free_shipping == Some(true) && !item.has_free_shipping() {
        return false;
    }
    if let Some(reputation) = &criteria.seller_reputation {
        if item.seller().reputation_level() != Some(reputation.as_str()) {
            return false;
        }
    }
    true
}

/// Number of items matching `criteria`, ignoring pagination.
pub fn count_matches<'a>(items: impl IntoIterator<Item = &'a Item>, criteria: &SearchCriteria) -> usize {
    items
        .into_iter()
        .filter(|item| matches(item, criteria))
        .count()
}

/// Stable in-place sort by the criteria's resolved field and direction.
pub fn sort(items: &mut [Item], field: SortField, direction: SortDirection) {
    items.sort_by(|a, b| compare(a, b, field, direction));
}

/// Run the whole pipeline: filter, sort, then slice `[offset, offset + limit)`.
pub fn execute<'a>(items: impl IntoIterator<Item = &'a Item>, criteria: &SearchCriteria) -> SearchPage {
    let mut matched: Vec<Item> = items
        .into_iter()
        .filter(|item| matches(item, criteria))
        .cloned()
        .collect();
    let total = matched.len();

    sort(&mut matched, criteria.sort_field(), criteria.sort_direction());

    let items = matched
        .into_iter()
        .skip(criteria.offset)
        .take(criteria.limit)
        .collect();

    SearchPage { items, total }
}

fn compare(a: &Item, b: &Item, field: SortField, direction: SortDirection) -> Ordering {
    match field {
        SortField::Price => directed(
            a.price().amount_in_cents().cmp(&b.price().amount_in_cents()),
            direction,
        ),
        SortField::SoldQuantity => directed(a.sold_quantity().cmp(&b.sold_quantity()), direction),
        SortField::CreatedDate => by_created(a.created_date(), b.created_date(), direction),
        // best sellers first, newest first among equals
        SortField::Relevance => b
            .sold_quantity()
            .cmp(&a.sold_quantity())
            .then_with(|| {
                by_created(a.created_date(), b.created_date(), SortDirection::Descending)
            }),
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Undated items sort after dated ones in either direction.
fn by_created(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.cmp(&b), direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{build_criteria, SearchRequest};
    use crate::item::fixtures::{free_shipping, item, new_item, seller};
    use crate::item::NewItem;
    use chrono::TimeZone;
    use core::str::FromStr;
    use rust_decimal::Decimal;

    fn ids(page: &SearchPage) -> Vec<&str> {
        page.items.iter().map(Item::id).collect()
    }

    fn request(sort: &str) -> SearchRequest {
        SearchRequest {
            sort: Some(sort.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn price_asc_orders_cheapest_first() {
        let items = vec![
            item("A", "Item A", 300, 0),
            item("B", "Item B", 100, 0),
            item("C", "Item C", 200, 0),
        ];
        let page = execute(&items, &build_criteria(request("price_asc")));
        let prices: Vec<i64> = page.items.iter().map(|i| i.price().amount_in_cents()).collect();
        assert_eq!(prices, [100, 200, 300]);
    }

    #[test]
    fn price_sort_is_stable_on_ties() {
        let items = vec![
            item("A", "Item A", 100, 0),
            item("B", "Item B", 100, 0),
            item("C", "Item C", 50, 0),
        ];
        let page = execute(&items, &build_criteria(request("price_desc")));
        assert_eq!(ids(&page), ["A", "B", "C"]);
    }

    #[test]
    fn relevance_orders_by_sold_then_newest() {
        let older = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let items = vec![
            Item::new(NewItem { created_date: Some(older), ..new_item("A", "A", 100, 10) }).unwrap(),
            Item::new(NewItem { created_date: None, ..new_item("B", "B", 100, 10) }).unwrap(),
            Item::new(NewItem { created_date: Some(newer), ..new_item("C", "C", 100, 10) }).unwrap(),
            item("D", "D", 100, 99),
        ];
        let page = execute(&items, &build_criteria(SearchRequest::default()));
        assert_eq!(ids(&page), ["D", "C", "A", "B"]);
    }

    #[test]
    fn newest_puts_undated_items_last() {
        let items = vec![
            Item::new(NewItem { created_date: None, ..new_item("A", "A", 100, 0) }).unwrap(),
            item("B", "B", 100, 0),
        ];
        let page = execute(&items, &build_criteria(request("newest")));
        assert_eq!(ids(&page), ["B", "A"]);
    }

    #[test]
    fn filters_are_combined() {
        let used = Item::new(NewItem {
            condition: "used".into(),
            ..new_item("USED", "Samsung Galaxy S21", 50_000, 3)
        })
        .unwrap();
        let shipped = Item::new(NewItem {
            shipping_methods: vec![free_shipping()],
            ..new_item("FREE", "Samsung Galaxy S23", 99_900, 3)
        })
        .unwrap();
        let other_seller = Item::new(NewItem {
            seller: seller(2002, "3_yellow"),
            shipping_methods: vec![free_shipping()],
            ..new_item("YELLOW", "Samsung Galaxy A54", 40_000, 3)
        })
        .unwrap();
        let items = vec![used, shipped, other_seller, item("IPHONE", "iPhone 15", 120_000, 3)];

        let criteria = build_criteria(SearchRequest {
            query: Some("galaxy".into()),
            condition: Some("new".into()),
            free_shipping: Some(true),
            seller_reputation: Some("5_green".into()),
            ..Default::default()
        });
        let page = execute(&items, &criteria);
        assert_eq!(ids(&page), ["FREE"]);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn free_shipping_false_does_not_filter() {
        let items = vec![item("A", "A", 100, 0)];
        let criteria = build_criteria(SearchRequest {
            free_shipping: Some(false),
            ..Default::default()
        });
        assert_eq!(execute(&items, &criteria).total, 1);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let items = vec![
            item("A", "A", 50_000, 0),
            item("B", "B", 99_900, 0),
            item("C", "C", 99_901, 0),
        ];
        let criteria = build_criteria(SearchRequest {
            min_price: Some(Decimal::from(500)),
            max_price: Some(Decimal::from_str("999.00").unwrap()),
            ..Default::default()
        });
        let page = execute(&items, &criteria);
        assert_eq!(ids(&page), ["A", "B"]);
    }

    #[test]
    fn finer_grained_bounds_never_widen_the_range() {
        let items = vec![item("LOW", "Low", 1_000, 0), item("HIGH", "High", 1_001, 0)];

        let below_max = build_criteria(SearchRequest {
            max_price: Some(Decimal::from_str("10.005").unwrap()),
            ..Default::default()
        });
        let page = execute(&items, &below_max);
        assert_eq!(ids(&page), ["LOW"]);
        assert_eq!(page.total, 1);

        let above_min = build_criteria(SearchRequest {
            min_price: Some(Decimal::from_str("10.004").unwrap()),
            ..Default::default()
        });
        let page = execute(&items, &above_min);
        assert_eq!(ids(&page), ["HIGH"]);
        assert_eq!(page.total, 1);

        let between = build_criteria(SearchRequest {
            min_price: Some(Decimal::from_str("10.001").unwrap()),
            max_price: Some(Decimal::from_str("10.009").unwrap()),
            ..Default::default()
        });
        assert_eq!(execute(&items, &between).total, 0);
        assert_eq!(count_matches(&items, &between), 0);
    }

    #[test]
    fn category_filter_and_inactive_items() {
        let paused = item("PAUSED", "Samsung", 100, 0).with_status("paused").unwrap();
        let items = vec![paused, item("ACTIVE", "Samsung", 100, 0)];
        let criteria = build_criteria(SearchRequest {
            category: Some("MLA1055".into()),
            ..Default::default()
        });
        let page = execute(&items, &criteria);
        assert_eq!(ids(&page), ["ACTIVE"]);

        let other = build_criteria(SearchRequest {
            category: Some("MLA1000".into()),
            ..Default::default()
        });
        assert!(execute(&items, &other).items.is_empty());
    }

    #[test]
    fn pages_are_sliced_after_sorting() {
        let items: Vec<Item> = (0..7)
            .map(|i| item(&format!("I{i}"), "Item", 100 * (i + 1), 0))
            .collect();
        let criteria = build_criteria(SearchRequest {
            sort: Some("price_asc".into()),
            limit: Some(3),
            offset: Some(3),
            ..Default::default()
        });
        let page = execute(&items, &criteria);
        assert_eq!(ids(&page), ["I3", "I4", "I5"]);
        assert_eq!(page.total, 7);

        let past_end = build_criteria(SearchRequest { offset: Some(10), ..Default::default() });
        let page = execute(&items, &past_end);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 7);
    }

    #[test]
    fn pagination_flags() {
        let pagination = Pagination::new(100, 20, 80);
        assert!(!pagination.has_next);
        assert!(pagination.has_previous);

        let first = Pagination::new(100, 20, 0);
        assert!(first.has_next);
        assert!(!first.has_previous);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_items() -> impl Strategy<Value = Vec<Item>> {
            prop::collection::vec((1i64..100_000, 0u32..500, any::<bool>()), 0..40).prop_map(
                |specs| {
                    specs
                        .into_iter()
                        .enumerate()
                        .map(|(i, (cents, sold, active))| {
                            let item = item(&format!("MLA{i}"), "Phone", cents, sold);
                            if active {
                                item
                            } else {
                                item.with_status("paused").unwrap()
                            }
                        })
                        .collect()
                },
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 128,
                .. ProptestConfig::default()
            })]

            #[test]
            fn pages_only_contain_active_items(
                items in arb_items(),
                limit in 1usize..30,
                offset in 0usize..50,
                sort in prop::sample::select(vec!["relevance", "price_asc", "price_desc", "best_sellers", "newest"]),
            ) {
                let criteria = build_criteria(SearchRequest {
                    sort: Some(sort.to_string()),
                    limit: Some(limit),
                    offset: Some(offset),
                    ..Default::default()
                });
                let page = execute(&items, &criteria);
                prop_assert!(page.items.iter().all(Item::is_active));
                prop_assert!(page.items.len() <= criteria.limit);
                prop_assert_eq!(count_matches(&items, &criteria), page.total);
            }

            #[test]
            fn pagination_flags_follow_offsets(
                total in 0usize..1_000,
                limit in 1usize..=100,
                offset in 0usize..1_000,
            ) {
                let pagination = Pagination::new(total, limit, offset);
                prop_assert_eq!(pagination.has_next, offset + limit < total);
                prop_assert_eq!(pagination.has_previous, offset > 0);
            }
        }
    }
}
