//! Translation of a loose search request into a normalized [`SearchCriteria`].

use rust_decimal::Decimal;
use serde::Deserialize;

/// Page size used when the request does not carry one.
pub const DEFAULT_LIMIT: usize = 50;

/// Upper bound for any page size, shared with the person listings.
pub const MAX_PAGE_SIZE: usize = 100;

/// Raw search parameters as received from a caller. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub condition: Option<String>,
    pub free_shipping: Option<bool>,
    pub seller_reputation: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortField {
    Relevance,
    Price,
    SoldQuantity,
    CreatedDate,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort keys accepted from callers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    BestSellers,
    Newest,
}

impl SortKey {
    /// Case-insensitive lookup; unknown or absent keys fall back to relevance.
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Relevance;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "best_sellers" => Self::BestSellers,
            "newest" => Self::Newest,
            _ => Self::Relevance,
        }
    }

    pub fn field(self) -> SortField {
        match self {
            Self::Relevance => SortField::Relevance,
            Self::PriceAsc | Self::PriceDesc => SortField::Price,
            Self::BestSellers => SortField::SoldQuantity,
            Self::Newest => SortField::CreatedDate,
        }
    }

    pub fn direction(self) -> SortDirection {
        match self {
            Self::PriceAsc => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::BestSellers => "best_sellers",
            Self::Newest => "newest",
        }
    }
}

/// Normalized search descriptor, consumed once by [`crate::search::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub category_id: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub condition: Option<String>,
    pub free_shipping: Option<bool>,
    pub seller_reputation: Option<String>,
    pub sort: SortKey,
    pub limit: usize,
    pub offset: usize,
}

impl SearchCriteria {
    pub fn sort_field(&self) -> SortField {
        self.sort.field()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort.direction()
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        build_criteria(SearchRequest::default())
    }
}

/// Build the criteria for one search. Never fails: bad sort keys fall back to
/// relevance and the limit is clamped to `1..=MAX_PAGE_SIZE`.
pub fn build_criteria(request: SearchRequest) -> SearchCriteria {
    let limit = request
        .limit
        .unwrap_or(DEFAULT_LIMIT)
        .clamp(1, MAX_PAGE_SIZE);

    SearchCriteria {
        query: present(request.query),
        category_id: present(request.category),
        min_price: request.min_price,
        max_price: request.max_price,
        condition: present(request.condition),
        free_shipping: request.free_shipping,
        seller_reputation: present(request.seller_reputation),
        sort: SortKey::resolve(request.sort.as_deref()),
        limit,
        offset: request.offset.unwrap_or(0),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn defaults_when_request_is_empty() {
        let criteria = build_criteria(SearchRequest::default());
        assert_eq!(criteria.sort, SortKey::Relevance);
        assert_eq!(criteria.sort_field(), SortField::Relevance);
        assert_eq!(criteria.sort_direction(), SortDirection::Descending);
        assert_eq!(criteria.limit, DEFAULT_LIMIT);
        assert_eq!(criteria.offset, 0);
        assert_eq!(criteria.query, None);
    }

    #[test]
    fn resolves_sort_keys_case_insensitively() {
        let cases = [
            ("price_asc", SortField::Price, SortDirection::Ascending),
            ("PRICE_DESC", SortField::Price, SortDirection::Descending),
            ("Best_Sellers", SortField::SoldQuantity, SortDirection::Descending),
            ("newest", SortField::CreatedDate, SortDirection::Descending),
            ("cheapest", SortField::Relevance, SortDirection::Descending),
        ];
        for (raw, field, direction) in cases {
            let key = SortKey::resolve(Some(raw));
            assert_eq!(key.field(), field, "{raw}");
            assert_eq!(key.direction(), direction, "{raw}");
        }
    }

    #[test]
    fn blank_strings_are_absent() {
        let criteria = build_criteria(SearchRequest {
            query: Some("  ".into()),
            category: Some(String::new()),
            condition: Some("new".into()),
            ..Default::default()
        });
        assert_eq!(criteria.query, None);
        assert_eq!(criteria.category_id, None);
        assert_eq!(criteria.condition.as_deref(), Some("new"));
    }

    #[test]
    fn numeric_filters_pass_through() {
        let criteria = build_criteria(SearchRequest {
            min_price: Some(Decimal::from_str("900").unwrap()),
            max_price: Some(Decimal::from_str("100").unwrap()),
            offset: Some(40),
            ..Default::default()
        });
        assert_eq!(criteria.min_price, Some(Decimal::from(900)));
        assert_eq!(criteria.max_price, Some(Decimal::from(100)));
        assert_eq!(criteria.offset, 40);
    }

    #[test]
    fn limit_is_clamped() {
        let high = build_criteria(SearchRequest { limit: Some(500), ..Default::default() });
        assert_eq!(high.limit, MAX_PAGE_SIZE);

        let zero = build_criteria(SearchRequest { limit: Some(0), ..Default::default() });
        assert_eq!(zero.limit, 1);
    }
}
