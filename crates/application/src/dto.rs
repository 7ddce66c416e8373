//! Response DTOs shared by several use cases.

use serde::Serialize;

use catalog_items::{Item, Pagination, Price, Seller};

/// Price as exposed to clients: `amount` is in minor units of `decimals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceDto {
    pub amount: i64,
    pub currency: String,
    pub decimals: u32,
    pub formatted: String,
}

impl From<&Price> for PriceDto {
    fn from(price: &Price) -> Self {
        Self {
            amount: price.amount_in_cents(),
            currency: price.currency().to_string(),
            decimals: price.decimals(),
            formatted: format!("{} {:.2}", price.currency(), price.amount()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerSummaryDto {
    pub id: u64,
    pub nickname: String,
    pub reputation_level: Option<String>,
}

impl From<&Seller> for SellerSummaryDto {
    fn from(seller: &Seller) -> Self {
        Self {
            id: seller.id().value(),
            nickname: seller.nickname().to_string(),
            reputation_level: seller.reputation_level().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummaryDto {
    pub id: String,
    pub title: String,
    pub price: PriceDto,
    pub condition: String,
    pub thumbnail_url: Option<String>,
    pub free_shipping: bool,
    pub seller: SellerSummaryDto,
    pub sold_quantity: u32,
}

impl From<&Item> for ItemSummaryDto {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id().to_string(),
            title: item.title().to_string(),
            price: item.price().into(),
            condition: item.condition().to_string(),
            thumbnail_url: thumbnail_url(item),
            free_shipping: item.has_free_shipping(),
            seller: item.seller().into(),
            sold_quantity: item.sold_quantity(),
        }
    }
}

/// One selectable value of a search facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterValueDto {
    pub id: String,
    pub name: String,
    pub count: Option<usize>,
}

impl FilterValueDto {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            count: None,
        }
    }
}

/// A search facet offered to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub values: Vec<FilterValueDto>,
}

impl FilterDto {
    pub fn list(id: &str, name: &str, values: Vec<FilterValueDto>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: "list".to_string(),
            values,
        }
    }
}

/// Paged item listing, used by search and by every item ranking endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    pub items: Vec<ItemSummaryDto>,
    pub pagination: Pagination,
    pub available_filters: Option<Vec<FilterDto>>,
    pub applied_sort: String,
}

impl SearchResponse {
    /// Listing without facets whose total is the number of items returned.
    pub fn listing(items: &[Item], limit: usize, offset: usize, sort: &str) -> Self {
        let items: Vec<ItemSummaryDto> = items.iter().map(ItemSummaryDto::from).collect();
        Self {
            pagination: Pagination::new(items.len(), limit, offset),
            items,
            available_filters: None,
            applied_sort: sort.to_string(),
        }
    }
}

/// URL of the main picture, if the item has any.
pub fn thumbnail_url(item: &Item) -> Option<String> {
    item.main_picture().map(|p| p.url().to_string())
}
