use chrono::{DateTime, Utc};

use catalog_core::{validate, DomainResult, Entity};

use crate::{
    attribute::ItemAttribute, category::Category, payment::PaymentMethod, picture::Picture,
    price::Price, seller::Seller, shipping::ShippingMethod, warranty::Warranty,
};

/// Status of a listing that can be shown and sold.
pub const ACTIVE_STATUS: &str = "active";

/// Input for [`Item::new`].
#[derive(Debug, Clone)]
pub struct NewItem {
    pub id: String,
    pub title: String,
    pub price: Price,
    pub condition: String,
    pub available_quantity: Option<u32>,
    pub sold_quantity: Option<u32>,
    pub permalink: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub listing_type_id: Option<String>,
    pub buying_mode: Option<String>,
    pub free_shipping: bool,
    pub local_pick_up: bool,
    pub created_date: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
    pub category: Category,
    pub seller: Seller,
    pub attributes: Vec<ItemAttribute>,
    pub pictures: Vec<Picture>,
    pub shipping_methods: Vec<ShippingMethod>,
    pub payment_method: Option<PaymentMethod>,
    pub warranty: Option<Warranty>,
}

/// Catalog listing (aggregate root).
///
/// Items are immutable once built; the `with_*` methods return an updated copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: String,
    title: String,
    price: Price,
    condition: String,
    available_quantity: u32,
    sold_quantity: u32,
    permalink: Option<String>,
    status: String,
    description: Option<String>,
    listing_type_id: Option<String>,
    buying_mode: Option<String>,
    free_shipping: bool,
    local_pick_up: bool,
    created_date: Option<DateTime<Utc>>,
    last_updated: Option<DateTime<Utc>>,
    category: Category,
    seller: Seller,
    attributes: Vec<ItemAttribute>,
    pictures: Vec<Picture>,
    shipping_methods: Vec<ShippingMethod>,
    payment_method: Option<PaymentMethod>,
    warranty: Option<Warranty>,
}

impl Item {
    pub fn new(new: NewItem) -> DomainResult<Self> {
        let id = new.id.trim();
        let title = new.title.trim();
        let condition = new.condition.trim();
        validate::text(id, 1, 50, "item id")?;
        validate::text(title, 1, 500, "title")?;
        validate::text(condition, 1, 20, "condition")?;

        let status = match validate::trimmed(new.status) {
            Some(status) => {
                validate::length(&status, 1, 20, "status")?;
                status
            }
            None => ACTIVE_STATUS.to_string(),
        };

        let mut pictures = new.pictures;
        pictures.sort_by_key(Picture::order);

        Ok(Self {
            id: id.to_string(),
            title: title.to_string(),
            price: new.price,
            condition: condition.to_string(),
            available_quantity: new.available_quantity.unwrap_or(0),
            sold_quantity: new.sold_quantity.unwrap_or(0),
            permalink: validate::trimmed(new.permalink),
            status,
            description: validate::trimmed(new.description),
            listing_type_id: validate::trimmed(new.listing_type_id),
            buying_mode: validate::trimmed(new.buying_mode),
            free_shipping: new.free_shipping,
            local_pick_up: new.local_pick_up,
            created_date: new.created_date,
            last_updated: new.last_updated,
            category: new.category,
            seller: new.seller,
            attributes: new.attributes,
            pictures,
            shipping_methods: new.shipping_methods,
            payment_method: new.payment_method,
            warranty: new.warranty,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn available_quantity(&self) -> u32 {
        self.available_quantity
    }

    pub fn sold_quantity(&self) -> u32 {
        self.sold_quantity
    }

    pub fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn listing_type_id(&self) -> Option<&str> {
        self.listing_type_id.as_deref()
    }

    pub fn buying_mode(&self) -> Option<&str> {
        self.buying_mode.as_deref()
    }

    pub fn created_date(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn seller(&self) -> &Seller {
        &self.seller
    }

    pub fn attributes(&self) -> &[ItemAttribute] {
        &self.attributes
    }

    /// Pictures ordered by their `order`.
    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    pub fn shipping_methods(&self) -> &[ShippingMethod] {
        &self.shipping_methods
    }

    pub fn payment_method(&self) -> Option<&PaymentMethod> {
        self.payment_method.as_ref()
    }

    pub fn warranty(&self) -> Option<&Warranty> {
        self.warranty.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case(ACTIVE_STATUS)
    }

    pub fn is_new(&self) -> bool {
        self.condition.eq_ignore_ascii_case("new")
    }

    /// Free shipping offered by the listing itself or by any of its shipping methods.
    pub fn has_free_shipping(&self) -> bool {
        self.free_shipping || self.shipping_methods.iter().any(ShippingMethod::is_free)
    }

    pub fn has_local_pick_up(&self) -> bool {
        self.local_pick_up || self.shipping_methods.iter().any(ShippingMethod::local_pick_up)
    }

    pub fn main_picture(&self) -> Option<&Picture> {
        self.pictures.first()
    }

    pub fn attribute(&self, attribute_id: &str) -> Option<&ItemAttribute> {
        self.attributes.iter().find(|a| a.attribute_id() == attribute_id)
    }

    pub fn with_price(&self, price: Price) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }

    pub fn with_available_quantity(&self, available_quantity: u32) -> Self {
        Self {
            available_quantity,
            ..self.clone()
        }
    }

    pub fn with_sold_quantity(&self, sold_quantity: u32) -> Self {
        Self {
            sold_quantity,
            ..self.clone()
        }
    }

    pub fn with_status(&self, status: &str) -> DomainResult<Self> {
        validate::text(status.trim(), 1, 20, "status")?;
        Ok(Self {
            status: status.trim().to_string(),
            ..self.clone()
        })
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
