//! Seller profile, reputation and listing views derived from their items.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use catalog_core::{DomainError, DomainResult};
use catalog_items::{Item, ItemRepository, Seller, SellerId};

use crate::dto::{thumbnail_url, PriceDto, SearchResponse};

/// Items inspected to build a profile.
const PROFILE_SAMPLE: usize = 10;
const RECENT_ITEMS: usize = 5;
const TOP_REPUTATION: &str = "5_green";
const TOP_POWER_SELLER: &str = "platinum";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerProfileDto {
    pub id: u64,
    pub nickname: String,
    pub permalink: Option<String>,
    pub registration_date: Option<DateTime<Utc>>,
    pub country_id: Option<String>,
    pub reputation_level: Option<String>,
    pub power_seller_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerMetricsDto {
    pub transactions_completed: u32,
    pub transactions_canceled: u32,
    pub rating_positive: f64,
    pub rating_negative: f64,
    pub rating_neutral: f64,
    pub active_items: usize,
    /// Mean listing price in major units.
    pub average_price: f64,
    pub top_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerItemDto {
    pub id: String,
    pub title: String,
    pub price: PriceDto,
    pub condition: String,
    pub sold_quantity: u32,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerAnalyticsResponse {
    pub seller: SellerProfileDto,
    pub metrics: SellerMetricsDto,
    pub recent_items: Vec<SellerItemDto>,
}

#[derive(Debug, Clone)]
pub struct SellerAnalyticsService<R> {
    repository: R,
}

impl<R: ItemRepository> SellerAnalyticsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// A seller is known through its active listings; none means not found.
    #[instrument(skip(self), fields(seller_id = %seller_id))]
    pub fn seller_profile(&self, seller_id: SellerId) -> DomainResult<SellerAnalyticsResponse> {
        let items = self.repository.find_by_seller(seller_id, PROFILE_SAMPLE, 0);
        let Some(first) = items.first() else {
            return Err(DomainError::not_found(format!("seller {seller_id}")));
        };

        Ok(SellerAnalyticsResponse {
            seller: profile(first.seller()),
            metrics: metrics(first.seller(), &items),
            recent_items: items.iter().take(RECENT_ITEMS).map(seller_item).collect(),
        })
    }

    pub fn seller_reputation_details(&self, seller_id: SellerId) -> DomainResult<SellerAnalyticsResponse> {
        self.seller_profile(seller_id)
    }

    #[instrument(skip(self), fields(seller_id = %seller_id))]
    pub fn seller_items(&self, seller_id: SellerId, limit: usize, offset: usize) -> SearchResponse {
        let items = self.repository.find_by_seller(seller_id, limit, offset);
        SearchResponse::listing(&items, limit, offset, "seller_items")
    }

    /// Best-selling listings from top-reputation or platinum sellers.
    #[instrument(skip(self))]
    pub fn top_rated_sellers(&self, limit: usize) -> SearchResponse {
        let items: Vec<Item> = self
            .repository
            .find_best_sellers(limit.saturating_mul(2))
            .into_iter()
            .filter(|item| is_top_rated(item.seller()))
            .take(limit)
            .collect();
        SearchResponse::listing(&items, limit, 0, "top_sellers")
    }
}

fn is_top_rated(seller: &Seller) -> bool {
    seller.reputation_level() == Some(TOP_REPUTATION)
        || seller.power_seller_status() == Some(TOP_POWER_SELLER)
}

fn profile(seller: &Seller) -> SellerProfileDto {
    SellerProfileDto {
        id: seller.id().value(),
        nickname: seller.nickname().to_string(),
        permalink: seller.permalink().map(str::to_string),
        registration_date: seller.registration_date(),
        country_id: seller.country_id().map(str::to_string),
        reputation_level: seller.reputation_level().map(str::to_string),
        power_seller_status: seller.power_seller_status().map(str::to_string),
    }
}

fn metrics(seller: &Seller, items: &[Item]) -> SellerMetricsDto {
    let average_price = if items.is_empty() {
        Decimal::ZERO
    } else {
        let sum: Decimal = items.iter().map(|i| i.price().amount()).sum();
        (sum / Decimal::from(items.len())).round_dp(2)
    };

    SellerMetricsDto {
        transactions_completed: seller.transactions_completed(),
        transactions_canceled: seller.transactions_canceled(),
        rating_positive: ratio(seller.rating_positive()),
        rating_negative: ratio(seller.rating_negative()),
        rating_neutral: ratio(seller.rating_neutral()),
        active_items: items.len(),
        average_price: average_price.to_f64().unwrap_or_default(),
        top_category: items
            .first()
            .map(|i| i.category().name().to_string())
            .unwrap_or_else(|| "N/A".to_string()),
    }
}

fn ratio(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn seller_item(item: &Item) -> SellerItemDto {
    SellerItemDto {
        id: item.id().to_string(),
        title: item.title().to_string(),
        price: item.price().into(),
        condition: item.condition().to_string(),
        sold_quantity: item.sold_quantity(),
        thumbnail_url: thumbnail_url(item),
    }
}
