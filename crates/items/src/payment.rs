use rust_decimal::Decimal;

use catalog_core::{DomainError, DomainResult, ValueObject};

/// Input for [`PaymentMethod::new`].
#[derive(Debug, Clone, Default)]
pub struct NewPaymentMethod {
    pub installments_quantity: Option<u32>,
    pub installments_rate: Option<Decimal>,
    pub installment_amount: Option<Decimal>,
    pub accepts_credit_card: bool,
    pub accepts_debit_card: bool,
    pub accepts_mercado_pago: bool,
}

/// Payment conditions of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    installments_quantity: Option<u32>,
    installments_rate: Decimal,
    installment_amount: Option<Decimal>,
    accepts_credit_card: bool,
    accepts_debit_card: bool,
    accepts_mercado_pago: bool,
}

impl ValueObject for PaymentMethod {}

impl PaymentMethod {
    pub fn new(new: NewPaymentMethod) -> DomainResult<Self> {
        if new.installments_quantity == Some(0) {
            return Err(DomainError::validation(
                "installments quantity must be greater than 0",
            ));
        }
        if new.installment_amount.is_some_and(|a| a < Decimal::ZERO) {
            return Err(DomainError::validation("installment amount cannot be negative"));
        }

        Ok(Self {
            installments_quantity: new.installments_quantity,
            installments_rate: new.installments_rate.unwrap_or(Decimal::ZERO),
            installment_amount: new.installment_amount,
            accepts_credit_card: new.accepts_credit_card,
            accepts_debit_card: new.accepts_debit_card,
            accepts_mercado_pago: new.accepts_mercado_pago,
        })
    }

    pub fn installments_quantity(&self) -> Option<u32> {
        self.installments_quantity
    }

    pub fn installments_rate(&self) -> Decimal {
        self.installments_rate
    }

    pub fn installment_amount(&self) -> Option<Decimal> {
        self.installment_amount
    }

    pub fn accepts_credit_card(&self) -> bool {
        self.accepts_credit_card
    }

    pub fn accepts_debit_card(&self) -> bool {
        self.accepts_debit_card
    }

    pub fn accepts_mercado_pago(&self) -> bool {
        self.accepts_mercado_pago
    }

    pub fn has_installments(&self) -> bool {
        self.installments_quantity.is_some_and(|q| q > 1)
    }

    /// Installments without interest.
    pub fn is_free_installments(&self) -> bool {
        self.has_installments() && self.installments_rate.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_installments_at_zero_rate_are_free() {
        let payment = PaymentMethod::new(NewPaymentMethod {
            installments_quantity: Some(12),
            ..Default::default()
        })
        .unwrap();
        assert!(payment.has_installments());
        assert!(payment.is_free_installments());
    }

    #[test]
    fn single_payment_has_no_installments() {
        let payment = PaymentMethod::new(NewPaymentMethod {
            installments_quantity: Some(1),
            ..Default::default()
        })
        .unwrap();
        assert!(!payment.has_installments());
        assert!(!payment.is_free_installments());
    }

    #[test]
    fn rejects_negative_installment_amount() {
        let err = PaymentMethod::new(NewPaymentMethod {
            installment_amount: Some(Decimal::NEGATIVE_ONE),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
