//! JSON catalog seeding.
//!
//! A catalog file is an object with an `items` array. Each record is mapped
//! through the domain factories, so a seed file obeys the same validation as
//! anything built in code.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use catalog_core::DomainError;
use catalog_items::{
    Category, Item, ItemAttribute, NewItem, NewPaymentMethod, NewPicture, NewSeller,
    NewShippingMethod, PaymentMethod, Picture, Price, Seller, ShippingMethod, Warranty,
};

const DEMO_CATALOG: &str = include_str!("../fixtures/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid item {item_id}: {source}")]
    InvalidItem {
        item_id: String,
        #[source]
        source: DomainError,
    },

    #[error("duplicate item id {0}")]
    DuplicateItem(String),
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    items: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
struct PriceRecord {
    amount: Decimal,
    currency: String,
    #[serde(default = "default_decimals")]
    decimals: u32,
}

fn default_decimals() -> u32 {
    2
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    id: String,
    name: String,
    path_from_root: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SellerRecord {
    id: u64,
    nickname: String,
    permalink: Option<String>,
    registration_date: Option<DateTime<Utc>>,
    country_id: Option<String>,
    reputation_level: Option<String>,
    power_seller_status: Option<String>,
    transactions_completed: Option<u32>,
    transactions_canceled: Option<u32>,
    rating_positive: Option<Decimal>,
    rating_negative: Option<Decimal>,
    rating_neutral: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
struct AttributeRecord {
    id: String,
    name: String,
    value: String,
    unit: Option<String>,
    #[serde(default = "default_value_type")]
    value_type: String,
}

fn default_value_type() -> String {
    "string".to_string()
}

#[derive(Debug, Deserialize)]
struct PictureRecord {
    id: String,
    url: String,
    secure_url: String,
    size: Option<String>,
    max_size: Option<String>,
    quality: Option<String>,
    order: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ShippingRecord {
    id: u32,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    cost: Option<i64>,
    currency: Option<String>,
    #[serde(default)]
    free_shipping: bool,
    estimated_delivery_days_min: Option<u32>,
    estimated_delivery_days_max: Option<u32>,
    #[serde(default)]
    local_pick_up: bool,
}

#[derive(Debug, Deserialize)]
struct PaymentRecord {
    installments_quantity: Option<u32>,
    installments_rate: Option<Decimal>,
    installment_amount: Option<Decimal>,
    #[serde(default)]
    accepts_credit_card: bool,
    #[serde(default)]
    accepts_debit_card: bool,
    #[serde(default)]
    accepts_mercado_pago: bool,
}

#[derive(Debug, Deserialize)]
struct WarrantyRecord {
    #[serde(rename = "type")]
    kind: Option<String>,
    time: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: String,
    title: String,
    price: PriceRecord,
    condition: String,
    available_quantity: Option<u32>,
    sold_quantity: Option<u32>,
    permalink: Option<String>,
    status: Option<String>,
    description: Option<String>,
    listing_type_id: Option<String>,
    buying_mode: Option<String>,
    #[serde(default)]
    free_shipping: bool,
    #[serde(default)]
    local_pick_up: bool,
    created_date: Option<DateTime<Utc>>,
    last_updated: Option<DateTime<Utc>>,
    category: CategoryRecord,
    seller: SellerRecord,
    #[serde(default)]
    attributes: Vec<AttributeRecord>,
    #[serde(default)]
    pictures: Vec<PictureRecord>,
    #[serde(default)]
    shipping_methods: Vec<ShippingRecord>,
    payment_method: Option<PaymentRecord>,
    warranty: Option<WarrantyRecord>,
}

impl ItemRecord {
    fn into_item(self) -> Result<Item, DomainError> {
        let price = Price::from_decimal(self.price.amount, &self.price.currency, self.price.decimals)?;
        let category = Category::new(&self.category.id, &self.category.name, self.category.path_from_root)?;

        let s = self.seller;
        let seller = Seller::new(NewSeller {
            id: s.id,
            nickname: s.nickname,
            permalink: s.permalink,
            registration_date: s.registration_date,
            country_id: s.country_id,
            reputation_level: s.reputation_level,
            power_seller_status: s.power_seller_status,
            transactions_completed: s.transactions_completed,
            transactions_canceled: s.transactions_canceled,
            rating_positive: s.rating_positive,
            rating_negative: s.rating_negative,
            rating_neutral: s.rating_neutral,
        })?;

        let attributes = self
            .attributes
            .into_iter()
            .map(|a| ItemAttribute::new(&a.id, &a.name, &a.value, a.unit, &a.value_type))
            .collect::<Result<Vec<_>, _>>()?;

        let pictures = self
            .pictures
            .into_iter()
            .map(|p| {
                Picture::new(NewPicture {
                    picture_id: p.id,
                    url: p.url,
                    secure_url: p.secure_url,
                    size: p.size,
                    max_size: p.max_size,
                    quality: p.quality,
                    order: p.order,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let shipping_methods = self
            .shipping_methods
            .into_iter()
            .map(|m| {
                ShippingMethod::new(NewShippingMethod {
                    method_id: m.id,
                    name: m.name,
                    kind: m.kind,
                    cost_minor_units: m.cost,
                    currency: m.currency,
                    free_shipping: m.free_shipping,
                    estimated_min_days: m.estimated_delivery_days_min,
                    estimated_max_days: m.estimated_delivery_days_max,
                    local_pick_up: m.local_pick_up,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let payment_method = self
            .payment_method
            .map(|p| {
                PaymentMethod::new(NewPaymentMethod {
                    installments_quantity: p.installments_quantity,
                    installments_rate: p.installments_rate,
                    installment_amount: p.installment_amount,
                    accepts_credit_card: p.accepts_credit_card,
                    accepts_debit_card: p.accepts_debit_card,
                    accepts_mercado_pago: p.accepts_mercado_pago,
                })
            })
            .transpose()?;

        let warranty = self
            .warranty
            .map(|w| Warranty::new(w.kind, w.time, w.description));

        Item::new(NewItem {
            id: self.id,
            title: self.title,
            price,
            condition: self.condition,
            available_quantity: self.available_quantity,
            sold_quantity: self.sold_quantity,
            permalink: self.permalink,
            status: self.status,
            description: self.description,
            listing_type_id: self.listing_type_id,
            buying_mode: self.buying_mode,
            free_shipping: self.free_shipping,
            local_pick_up: self.local_pick_up,
            created_date: self.created_date,
            last_updated: self.last_updated,
            category,
            seller,
            attributes,
            pictures,
            shipping_methods,
            payment_method,
            warranty,
        })
    }
}

/// Parse a JSON catalog into validated items, preserving file order.
pub fn load_catalog(json: &str) -> Result<Vec<Item>, SeedError> {
    let catalog: CatalogRecord = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(catalog.items.len());

    for record in catalog.items {
        let item_id = record.id.trim().to_string();
        if !seen.insert(item_id.clone()) {
            return Err(SeedError::DuplicateItem(item_id));
        }
        let item = record
            .into_item()
            .map_err(|source| SeedError::InvalidItem { item_id, source })?;
        items.push(item);
    }

    tracing::info!(items = items.len(), "catalog loaded");
    Ok(items)
}

pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Vec<Item>, SeedError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_catalog(&json)
}

/// The catalog bundled with the crate.
pub fn demo_catalog() -> Result<Vec<Item>, SeedError> {
    load_catalog(DEMO_CATALOG)
}
