use tracing::instrument;

use catalog_items::{build_criteria, ItemRepository, Pagination, SearchRequest};

use crate::dto::{FilterDto, FilterValueDto, ItemSummaryDto, SearchResponse};

/// Attribute whose distinct values become the dynamic brand facet.
const BRAND_ATTRIBUTE: &str = "BRAND";

/// Catalog search use case: criteria, execution and facets.
#[derive(Debug, Clone)]
pub struct SearchService<R> {
    repository: R,
}

impl<R: ItemRepository> SearchService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(query = ?request.query, category = ?request.category))]
    pub fn search(&self, request: SearchRequest) -> SearchResponse {
        let criteria = build_criteria(request);
        let page = self.repository.search(&criteria);
        let total = self.repository.count_matches(&criteria);
        tracing::debug!(total, returned = page.items.len(), "search executed");

        SearchResponse {
            items: page.items.iter().map(ItemSummaryDto::from).collect(),
            pagination: Pagination::new(total, criteria.limit, criteria.offset),
            available_filters: Some(self.available_filters(criteria.category_id.as_deref())),
            applied_sort: criteria.sort.as_str().to_string(),
        }
    }

    /// Static condition / shipping / reputation facets, plus brands when a
    /// category is selected and has any.
    pub fn available_filters(&self, category_id: Option<&str>) -> Vec<FilterDto> {
        let mut filters = vec![
            FilterDto::list(
                "condition",
                "Condición",
                vec![
                    FilterValueDto::new("new", "Nuevo"),
                    FilterValueDto::new("used", "Usado"),
                ],
            ),
            FilterDto::list(
                "shipping",
                "Envío",
                vec![
                    FilterValueDto::new("free", "Gratis"),
                    FilterValueDto::new("local_pickup", "Retiro en persona"),
                ],
            ),
            FilterDto::list(
                "seller_reputation",
                "Reputación del vendedor",
                vec![
                    FilterValueDto::new("5_green", "5 estrellas"),
                    FilterValueDto::new("4_light_green", "4 estrellas"),
                    FilterValueDto::new("3_yellow", "3 estrellas"),
                ],
            ),
        ];

        if let Some(category_id) = category_id {
            let brands = self
                .repository
                .distinct_attribute_values(BRAND_ATTRIBUTE, Some(category_id));
            if !brands.is_empty() {
                let values = brands
                    .into_iter()
                    .map(|brand| FilterValueDto::new(brand.to_lowercase(), brand))
                    .collect();
                filters.push(FilterDto::list("brand", "Marca", values));
            }
        }

        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog, item_in};
    use catalog_infra::InMemoryItemRepository;
    use std::sync::Arc;

    fn service() -> SearchService<Arc<InMemoryItemRepository>> {
        SearchService::new(Arc::new(catalog()))
    }

    fn filter_ids(response: &SearchResponse) -> Vec<&str> {
        response
            .available_filters
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|f| f.id.as_str())
            .collect()
    }

    #[test]
    fn search_returns_page_and_static_facets() {
        let response = service().search(SearchRequest {
            query: Some("samsung".into()),
            sort: Some("PRICE_ASC".into()),
            ..Default::default()
        });
        assert_eq!(response.applied_sort, "price_asc");
        assert_eq!(response.pagination.total, 2);
        assert!(!response.pagination.has_next);
        let prices: Vec<i64> = response.items.iter().map(|i| i.price.amount).collect();
        assert_eq!(prices, [50_000, 99_900]);
        assert_eq!(filter_ids(&response), ["condition", "shipping", "seller_reputation"]);
    }

    #[test]
    fn brand_facet_only_with_category() {
        let response = service().search(SearchRequest {
            category: Some("MLA1055".into()),
            ..Default::default()
        });
        assert_eq!(
            filter_ids(&response),
            ["condition", "shipping", "seller_reputation", "brand"]
        );
        let brand = response
            .available_filters
            .as_ref()
            .and_then(|f| f.iter().find(|f| f.id == "brand"))
            .unwrap();
        let values: Vec<(&str, &str)> = brand
            .values
            .iter()
            .map(|v| (v.id.as_str(), v.name.as_str()))
            .collect();
        assert_eq!(values, [("apple", "Apple"), ("samsung", "Samsung")]);
        assert_eq!(brand.kind, "list");
    }

    #[test]
    fn no_brand_facet_when_category_has_no_brands() {
        let repository = InMemoryItemRepository::new(vec![item_in("X1", "Bicicleta", "MLA9999", 10_000, 1)]);
        let service = SearchService::new(repository);
        let response = service.search(SearchRequest {
            category: Some("MLA9999".into()),
            ..Default::default()
        });
        assert_eq!(filter_ids(&response).len(), 3);
    }

    #[test]
    fn pagination_reflects_total_before_paging() {
        let response = service().search(SearchRequest {
            limit: Some(1),
            offset: Some(1),
            ..Default::default()
        });
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.pagination.total, 4);
        assert!(response.pagination.has_next);
        assert!(response.pagination.has_previous);
    }
}
