use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{validate, DomainError, DomainResult, Entity};

/// Seller identifier (positive, assigned by the marketplace).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(u64);

impl SellerId {
    pub fn new(id: u64) -> DomainResult<Self> {
        if id == 0 {
            return Err(DomainError::validation("seller id must be greater than 0"));
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for SellerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Input for [`Seller::new`].
#[derive(Debug, Clone, Default)]
pub struct NewSeller {
    pub id: u64,
    pub nickname: String,
    pub permalink: Option<String>,
    pub registration_date: Option<DateTime<Utc>>,
    pub country_id: Option<String>,
    pub reputation_level: Option<String>,
    pub power_seller_status: Option<String>,
    pub transactions_completed: Option<u32>,
    pub transactions_canceled: Option<u32>,
    pub rating_positive: Option<Decimal>,
    pub rating_negative: Option<Decimal>,
    pub rating_neutral: Option<Decimal>,
}

/// Seller of a listing, with its reputation snapshot.
///
/// Rating ratios are each within `[0, 1]`; they are not required to add up to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    id: SellerId,
    nickname: String,
    permalink: Option<String>,
    registration_date: Option<DateTime<Utc>>,
    country_id: Option<String>,
    reputation_level: Option<String>,
    power_seller_status: Option<String>,
    transactions_completed: u32,
    transactions_canceled: u32,
    rating_positive: Decimal,
    rating_negative: Decimal,
    rating_neutral: Decimal,
}

impl Seller {
    pub fn new(new: NewSeller) -> DomainResult<Self> {
        let id = SellerId::new(new.id)?;
        validate::text(new.nickname.trim(), 1, 100, "nickname")?;

        Ok(Self {
            id,
            nickname: new.nickname.trim().to_string(),
            permalink: validate::trimmed(new.permalink),
            registration_date: new.registration_date,
            country_id: validate::trimmed(new.country_id),
            reputation_level: validate::trimmed(new.reputation_level),
            power_seller_status: validate::trimmed(new.power_seller_status),
            transactions_completed: new.transactions_completed.unwrap_or(0),
            transactions_canceled: new.transactions_canceled.unwrap_or(0),
            rating_positive: ratio(new.rating_positive, "rating_positive")?,
            rating_negative: ratio(new.rating_negative, "rating_negative")?,
            rating_neutral: ratio(new.rating_neutral, "rating_neutral")?,
        })
    }

    pub fn id(&self) -> SellerId {
        self.id
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref()
    }

    pub fn registration_date(&self) -> Option<DateTime<Utc>> {
        self.registration_date
    }

    pub fn country_id(&self) -> Option<&str> {
        self.country_id.as_deref()
    }

    pub fn reputation_level(&self) -> Option<&str> {
        self.reputation_level.as_deref()
    }

    pub fn power_seller_status(&self) -> Option<&str> {
        self.power_seller_status.as_deref()
    }

    pub fn transactions_completed(&self) -> u32 {
        self.transactions_completed
    }

    pub fn transactions_canceled(&self) -> u32 {
        self.transactions_canceled
    }

    pub fn rating_positive(&self) -> Decimal {
        self.rating_positive
    }

    pub fn rating_negative(&self) -> Decimal {
        self.rating_negative
    }

    pub fn rating_neutral(&self) -> Decimal {
        self.rating_neutral
    }

    pub fn is_power_seller(&self) -> bool {
        self.power_seller_status.is_some()
    }

    pub fn total_transactions(&self) -> u32 {
        self.transactions_completed
            .saturating_add(self.transactions_canceled)
    }
}

impl Entity for Seller {
    type Id = SellerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn ratio(value: Option<Decimal>, field: &str) -> DomainResult<Decimal> {
    let value = value.unwrap_or(Decimal::ZERO);
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(DomainError::validation(format!(
            "{field} must be between 0 and 1"
        )));
    }
    Ok(value)
}
