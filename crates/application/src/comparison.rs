//! Side-by-side comparison of listings.

use indexmap::IndexMap;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tracing::instrument;

use catalog_core::{DomainError, DomainResult};
use catalog_items::{Item, ItemAttribute, ItemRepository};

use crate::dto::{thumbnail_url, PriceDto, SellerSummaryDto};

/// Listings sold more than this many times compete for "best value".
const BEST_VALUE_MIN_SOLD: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparedItemDto {
    pub id: String,
    pub title: String,
    pub price: PriceDto,
    pub condition: String,
    pub thumbnail_url: Option<String>,
    pub free_shipping: bool,
    pub seller: SellerSummaryDto,
    pub sold_quantity: u32,
    /// Seller's positive rating ratio.
    pub rating: f64,
    pub key_attributes: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSummaryDto {
    pub cheapest: PriceDto,
    pub most_expensive: PriceDto,
    pub best_value: String,
    pub most_popular: String,
    pub total_items: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeValueDto {
    pub item_id: String,
    pub value: String,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeComparisonDto {
    pub attribute_name: String,
    pub values: Vec<AttributeValueDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResponse {
    pub items: Vec<ComparedItemDto>,
    pub summary: ComparisonSummaryDto,
    pub attribute_comparisons: Vec<AttributeComparisonDto>,
}

#[derive(Debug, Clone)]
pub struct ComparisonService<R> {
    repository: R,
}

impl<R: ItemRepository> ComparisonService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Compare the given listings. Unknown ids are skipped; at least one must resolve.
    #[instrument(skip(self), fields(requested = item_ids.len()))]
    pub fn compare(&self, item_ids: &[String]) -> DomainResult<ComparisonResponse> {
        if item_ids.is_empty() {
            return Err(DomainError::validation("item ids list cannot be empty"));
        }

        let mut items = Vec::with_capacity(item_ids.len());
        for id in item_ids {
            match self.repository.find_by_id(id) {
                Some(item) => items.push(item),
                None => tracing::warn!(item_id = %id, "dropping unknown item from comparison"),
            }
        }

        let Some(summary) = summarize(&items) else {
            return Err(DomainError::not_found("no valid items found for comparison"));
        };

        Ok(ComparisonResponse {
            items: items.iter().map(compared_item).collect(),
            summary,
            attribute_comparisons: attribute_table(&items),
        })
    }
}

/// `None` when there is nothing to summarize.
fn summarize(items: &[Item]) -> Option<ComparisonSummaryDto> {
    let cheapest = first_min_by_key(items, |i| i.price().amount_in_cents())?;
    let most_expensive = first_max_by_key(items, |i| i.price().amount_in_cents())?;
    let most_popular = first_max_by_key(items, Item::sold_quantity)?;

    let popular: Vec<Item> = items
        .iter()
        .filter(|i| i.sold_quantity() > BEST_VALUE_MIN_SOLD)
        .cloned()
        .collect();
    let best_value = first_min_by_key(&popular, |i| i.price().amount_in_cents())
        .map(|i| i.id().to_string())
        .unwrap_or_else(|| most_popular.id().to_string());

    Some(ComparisonSummaryDto {
        cheapest: cheapest.price().into(),
        most_expensive: most_expensive.price().into(),
        best_value,
        most_popular: most_popular.id().to_string(),
        total_items: items.len(),
    })
}

fn first_min_by_key<'a, K: Ord>(items: &'a [Item], key: impl Fn(&Item) -> K) -> Option<&'a Item> {
    items.iter().reduce(|best, item| if key(item) < key(best) { item } else { best })
}

fn first_max_by_key<'a, K: Ord>(items: &'a [Item], key: impl Fn(&Item) -> K) -> Option<&'a Item> {
    items.iter().reduce(|best, item| if key(item) > key(best) { item } else { best })
}

fn compared_item(item: &Item) -> ComparedItemDto {
    ComparedItemDto {
        id: item.id().to_string(),
        title: item.title().to_string(),
        price: item.price().into(),
        condition: item.condition().to_string(),
        thumbnail_url: thumbnail_url(item),
        free_shipping: item.has_free_shipping(),
        seller: item.seller().into(),
        sold_quantity: item.sold_quantity(),
        rating: item.seller().rating_positive().to_f64().unwrap_or_default(),
        key_attributes: key_attributes(item),
    }
}

/// Headline attributes shown on each compared card.
fn key_attributes(item: &Item) -> IndexMap<String, String> {
    let mut attributes = IndexMap::new();
    for attribute in item.attributes() {
        let (label, value) = match attribute.attribute_id() {
            "BRAND" => ("Marca", attribute.value().to_string()),
            "MODEL" => ("Modelo", attribute.value().to_string()),
            "STORAGE" => ("Almacenamiento", with_unit(attribute)),
            "COLOR" => ("Color", attribute.value().to_string()),
            "SCREEN_SIZE" => ("Pantalla", with_unit(attribute)),
            _ => continue,
        };
        attributes.insert(label.to_string(), value);
    }
    attributes
}

fn with_unit(attribute: &ItemAttribute) -> String {
    match attribute.unit() {
        Some(unit) => format!("{} {unit}", attribute.value()),
        None => attribute.value().to_string(),
    }
}

/// Groups keyed by display name in first-appearance order; values follow item order.
fn attribute_table(items: &[Item]) -> Vec<AttributeComparisonDto> {
    let mut groups: IndexMap<&str, Vec<AttributeValueDto>> = IndexMap::new();
    for item in items {
        for attribute in item.attributes() {
            groups
                .entry(display_name(attribute.attribute_id()))
                .or_default()
                .push(AttributeValueDto {
                    item_id: item.id().to_string(),
                    value: attribute.value().to_string(),
                    unit: attribute.unit().map(str::to_string),
                });
        }
    }

    groups
        .into_iter()
        .map(|(name, values)| AttributeComparisonDto {
            attribute_name: name.to_string(),
            values,
        })
        .collect()
}

/// Localized label for a known attribute id; unknown ids pass through.
pub fn display_name(attribute_id: &str) -> &str {
    match attribute_id {
        "BRAND" => "Marca",
        "MODEL" => "Modelo",
        "STORAGE" => "Almacenamiento",
        "COLOR" => "Color",
        "SCREEN_SIZE" => "Tamaño de Pantalla",
        "RAM" => "Memoria RAM",
        "PROCESSOR" => "Procesador",
        "CONNECTION" => "Conexión",
        "BATTERY" => "Batería",
        "RESOLUTION" => "Resolución",
        "POWER" => "Potencia",
        "TYPE" => "Tipo",
        "FEATURES" => "Características",
        "GENDER" => "Género",
        "MATERIAL" => "Material",
        "WHEEL_SIZE" => "Rodado",
        "SPEEDS" => "Velocidades",
        "FRAME" => "Cuadro",
        "CAPACITY" => "Capacidad",
        other => other,
    }
}
