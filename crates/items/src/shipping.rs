use catalog_core::{validate, DomainError, DomainResult, ValueObject};

use crate::price::Price;

const DEFAULT_SHIPPING_CURRENCY: &str = "ARS";
const SHIPPING_COST_DECIMALS: u32 = 2;

/// Input for [`ShippingMethod::new`].
#[derive(Debug, Clone, Default)]
pub struct NewShippingMethod {
    pub method_id: u32,
    pub name: String,
    pub kind: String,
    pub cost_minor_units: Option<i64>,
    pub currency: Option<String>,
    pub free_shipping: bool,
    pub estimated_min_days: Option<u32>,
    pub estimated_max_days: Option<u32>,
    pub local_pick_up: bool,
}

/// A delivery option offered for a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingMethod {
    method_id: u32,
    name: String,
    kind: String,
    cost: Price,
    free_shipping: bool,
    estimated_min_days: Option<u32>,
    estimated_max_days: Option<u32>,
    local_pick_up: bool,
}

impl ValueObject for ShippingMethod {}

impl ShippingMethod {
    pub fn new(new: NewShippingMethod) -> DomainResult<Self> {
        if new.method_id == 0 {
            return Err(DomainError::validation("shipping method id must be greater than 0"));
        }
        validate::text(new.name.trim(), 1, 255, "shipping method name")?;
        validate::text(new.kind.trim(), 1, 50, "shipping method type")?;

        let currency = validate::trimmed(new.currency)
            .unwrap_or_else(|| DEFAULT_SHIPPING_CURRENCY.to_string());
        let cost = Price::of_minor_units(
            new.cost_minor_units.unwrap_or(0),
            &currency,
            SHIPPING_COST_DECIMALS,
        )?;

        Ok(Self {
            method_id: new.method_id,
            name: new.name.trim().to_string(),
            kind: new.kind.trim().to_string(),
            cost,
            free_shipping: new.free_shipping,
            estimated_min_days: new.estimated_min_days,
            estimated_max_days: new.estimated_max_days,
            local_pick_up: new.local_pick_up,
        })
    }

    pub fn method_id(&self) -> u32 {
        self.method_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn cost(&self) -> &Price {
        &self.cost
    }

    pub fn is_free(&self) -> bool {
        self.free_shipping
    }

    pub fn estimated_min_days(&self) -> Option<u32> {
        self.estimated_min_days
    }

    pub fn estimated_max_days(&self) -> Option<u32> {
        self.estimated_max_days
    }

    pub fn local_pick_up(&self) -> bool {
        self.local_pick_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_defaults_to_zero_ars() {
        let method = ShippingMethod::new(NewShippingMethod {
            method_id: 1,
            name: "Envío a domicilio".into(),
            kind: "standard".into(),
            free_shipping: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(method.cost().amount_in_cents(), 0);
        assert_eq!(method.cost().currency(), "ARS");
        assert!(method.is_free());
    }

    #[test]
    fn rejects_zero_method_id() {
        let err = ShippingMethod::new(NewShippingMethod {
            method_id: 0,
            name: "Retiro".into(),
            kind: "pickup".into(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
