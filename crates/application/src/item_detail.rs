use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use catalog_core::{validate, DomainError, DomainResult};
use catalog_items::{
    Category, Item, ItemAttribute, ItemRepository, PaymentMethod, Picture, Price, Seller,
    ShippingMethod, Warranty,
};

/// Price in major units, as stored on the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPriceDto {
    pub amount: Decimal,
    pub currency: String,
    pub decimals: u32,
}

impl From<&Price> for DetailPriceDto {
    fn from(price: &Price) -> Self {
        Self {
            amount: price.amount(),
            currency: price.currency().to_string(),
            decimals: price.decimals(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub path_from_root: Option<String>,
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            path_from_root: category.path_from_root().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerDto {
    pub id: u64,
    pub nickname: String,
    pub permalink: Option<String>,
    pub registration_date: Option<DateTime<Utc>>,
    pub country_id: Option<String>,
    pub reputation_level: Option<String>,
    pub power_seller_status: Option<String>,
    pub transactions_completed: u32,
    pub transactions_canceled: u32,
    pub rating_positive: Decimal,
    pub rating_negative: Decimal,
    pub rating_neutral: Decimal,
}

impl From<&Seller> for SellerDto {
    fn from(seller: &Seller) -> Self {
        Self {
            id: seller.id().value(),
            nickname: seller.nickname().to_string(),
            permalink: seller.permalink().map(str::to_string),
            registration_date: seller.registration_date(),
            country_id: seller.country_id().map(str::to_string),
            reputation_level: seller.reputation_level().map(str::to_string),
            power_seller_status: seller.power_seller_status().map(str::to_string),
            transactions_completed: seller.transactions_completed(),
            transactions_canceled: seller.transactions_canceled(),
            rating_positive: seller.rating_positive(),
            rating_negative: seller.rating_negative(),
            rating_neutral: seller.rating_neutral(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDto {
    pub attribute_id: String,
    pub name: String,
    pub value: String,
    pub unit: Option<String>,
    pub value_type: String,
}

impl From<&ItemAttribute> for AttributeDto {
    fn from(attribute: &ItemAttribute) -> Self {
        Self {
            attribute_id: attribute.attribute_id().to_string(),
            name: attribute.name().to_string(),
            value: attribute.value().to_string(),
            unit: attribute.unit().map(str::to_string),
            value_type: attribute.value_type().as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PictureDto {
    pub picture_id: String,
    pub url: String,
    pub secure_url: String,
    pub size: String,
    pub max_size: String,
    pub quality: String,
    pub order: u32,
}

impl From<&Picture> for PictureDto {
    fn from(picture: &Picture) -> Self {
        Self {
            picture_id: picture.picture_id().to_string(),
            url: picture.url().to_string(),
            secure_url: picture.secure_url().to_string(),
            size: picture.size().to_string(),
            max_size: picture.max_size().to_string(),
            quality: picture.quality().to_string(),
            order: picture.order(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingMethodDto {
    pub method_id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub cost: DetailPriceDto,
    pub free_shipping: bool,
    pub estimated_min_days: Option<u32>,
    pub estimated_max_days: Option<u32>,
    pub local_pick_up: bool,
}

impl From<&ShippingMethod> for ShippingMethodDto {
    fn from(method: &ShippingMethod) -> Self {
        Self {
            method_id: method.method_id(),
            name: method.name().to_string(),
            kind: method.kind().to_string(),
            cost: method.cost().into(),
            free_shipping: method.is_free(),
            estimated_min_days: method.estimated_min_days(),
            estimated_max_days: method.estimated_max_days(),
            local_pick_up: method.local_pick_up(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethodDto {
    pub installments_quantity: Option<u32>,
    pub installments_rate: Decimal,
    pub installment_amount: Option<Decimal>,
    pub accepts_credit_card: bool,
    pub accepts_debit_card: bool,
    pub accepts_mercado_pago: bool,
    pub free_installments: bool,
}

impl From<&PaymentMethod> for PaymentMethodDto {
    fn from(payment: &PaymentMethod) -> Self {
        Self {
            installments_quantity: payment.installments_quantity(),
            installments_rate: payment.installments_rate(),
            installment_amount: payment.installment_amount(),
            accepts_credit_card: payment.accepts_credit_card(),
            accepts_debit_card: payment.accepts_debit_card(),
            accepts_mercado_pago: payment.accepts_mercado_pago(),
            free_installments: payment.is_free_installments(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarrantyDto {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
}

impl From<&Warranty> for WarrantyDto {
    fn from(warranty: &Warranty) -> Self {
        Self {
            kind: warranty.kind().map(str::to_string),
            time: warranty.time().map(str::to_string),
            description: warranty.description().map(str::to_string),
        }
    }
}

/// Full projection of one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetailResponse {
    pub id: String,
    pub title: String,
    pub price: DetailPriceDto,
    pub condition_type: String,
    pub available_quantity: u32,
    pub sold_quantity: u32,
    pub permalink: Option<String>,
    pub status: String,
    pub description: Option<String>,
    pub listing_type: Option<String>,
    pub buying_mode: Option<String>,
    pub free_shipping: bool,
    pub local_pick_up: bool,
    pub created_date: Option<DateTime<Utc>>,
    pub updated_date: Option<DateTime<Utc>>,
    pub category: CategoryDto,
    pub seller: SellerDto,
    pub attributes: Vec<AttributeDto>,
    pub pictures: Vec<PictureDto>,
    pub shipping_methods: Vec<ShippingMethodDto>,
    pub payment_method: Option<PaymentMethodDto>,
    pub warranty: Option<WarrantyDto>,
}

impl From<&Item> for ItemDetailResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id().to_string(),
            title: item.title().to_string(),
            price: item.price().into(),
            condition_type: item.condition().to_string(),
            available_quantity: item.available_quantity(),
            sold_quantity: item.sold_quantity(),
            permalink: item.permalink().map(str::to_string),
            status: item.status().to_string(),
            description: item.description().map(str::to_string),
            listing_type: item.listing_type_id().map(str::to_string),
            buying_mode: item.buying_mode().map(str::to_string),
            free_shipping: item.has_free_shipping(),
            local_pick_up: item.has_local_pick_up(),
            created_date: item.created_date(),
            updated_date: item.last_updated(),
            category: item.category().into(),
            seller: item.seller().into(),
            attributes: item.attributes().iter().map(AttributeDto::from).collect(),
            pictures: item.pictures().iter().map(PictureDto::from).collect(),
            shipping_methods: item.shipping_methods().iter().map(ShippingMethodDto::from).collect(),
            payment_method: item.payment_method().map(PaymentMethodDto::from),
            warranty: item.warranty().map(WarrantyDto::from),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemDetailService<R> {
    repository: R,
}

impl<R: ItemRepository> ItemDetailService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Existence is checked before the active status.
    #[instrument(skip(self))]
    pub fn get_item_detail(&self, item_id: &str) -> DomainResult<ItemDetailResponse> {
        validate::not_blank(item_id, "item id")?;

        let item = self
            .repository
            .find_by_id(item_id.trim())
            .ok_or_else(|| DomainError::not_found(format!("item {}", item_id.trim())))?;

        if !item.is_active() {
            return Err(DomainError::not_active(format!("item {} is not active", item.id())));
        }

        Ok(ItemDetailResponse::from(&item))
    }
}
