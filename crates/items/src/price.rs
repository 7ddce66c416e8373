use rust_decimal::{Decimal, RoundingStrategy};

use catalog_core::{validate, DomainError, DomainResult, ValueObject};

/// Highest supported scale for a price.
pub const MAX_DECIMALS: u32 = 4;

/// Monetary amount in a given currency, always rounded half-up to `decimals`.
///
/// `amount_in_cents()` (the amount in minor units of the declared scale) is the
/// canonical comparison and sort key. Never compare on the decimal form directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Price {
    amount: Decimal,
    currency: String,
    decimals: u32,
}

impl ValueObject for Price {}

impl Price {
    /// Build a price from an integer amount of minor units (`99900`, `"ARS"`, `2` is 999.00 ARS).
    pub fn of_minor_units(amount: i64, currency: &str, decimals: u32) -> DomainResult<Self> {
        Self::validate(currency, decimals)?;
        Ok(Self::scaled(Decimal::new(amount, decimals), currency, decimals))
    }

    /// Build a price from a decimal amount, rounding half-up to `decimals`.
    pub fn from_decimal(amount: Decimal, currency: &str, decimals: u32) -> DomainResult<Self> {
        Self::validate(currency, decimals)?;
        Ok(Self::scaled(amount, currency, decimals))
    }

    fn validate(currency: &str, decimals: u32) -> DomainResult<()> {
        validate::not_blank(currency, "currency")?;
        if decimals > MAX_DECIMALS {
            return Err(DomainError::validation(format!(
                "decimals must be between 0 and {MAX_DECIMALS}"
            )));
        }
        if currency.trim().chars().count() != 3 {
            return Err(DomainError::validation(
                "currency must have exactly 3 characters",
            ));
        }
        Ok(())
    }

    fn scaled(amount: Decimal, currency: &str, decimals: u32) -> Self {
        let mut amount =
            amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(decimals);
        Self {
            amount,
            currency: currency.trim().to_uppercase(),
            decimals,
        }
    }

    /// Smallest amount in minor units at `decimals` scale that is `>= bound`.
    ///
    /// Lower search bounds are rounded up so no price under the bound passes.
    pub fn lower_bound_in_cents(bound: Decimal, decimals: u32) -> i64 {
        minor_units(bound, decimals, RoundingStrategy::ToPositiveInfinity)
    }

    /// Largest amount in minor units at `decimals` scale that is `<= bound`.
    pub fn upper_bound_in_cents(bound: Decimal, decimals: u32) -> i64 {
        minor_units(bound, decimals, RoundingStrategy::ToNegativeInfinity)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Amount expressed in minor units of the declared scale.
    pub fn amount_in_cents(&self) -> i64 {
        saturate(self.amount.mantissa())
    }
}

fn minor_units(amount: Decimal, decimals: u32, strategy: RoundingStrategy) -> i64 {
    let mut scaled = amount.round_dp_with_strategy(decimals, strategy);
    scaled.rescale(decimals);
    saturate(scaled.mantissa())
}

fn saturate(mantissa: i128) -> i64 {
    i64::try_from(mantissa).unwrap_or(if mantissa < 0 { i64::MIN } else { i64::MAX })
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
