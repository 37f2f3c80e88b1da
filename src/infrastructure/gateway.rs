use crate::domain::money::Money;
use crate::domain::payment::{PaymentInstrument, PaymentResult};
use crate::domain::ports::PaymentGateway;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

/// A payment gateway that decides locally instead of calling a processor.
///
/// Charges are approved unless the security code is malformed, the card number is on
/// the decline list, or the amount exceeds the configured credit limit.
#[derive(Debug, Default, Clone)]
pub struct SimulatedGateway {
    credit_limit: Option<Money>,
    declined_cards: HashSet<String>,
}

impl SimulatedGateway {
    /// Creates a gateway that approves every charge.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credit_limit(mut self, limit: Money) -> Self {
        self.credit_limit = Some(limit);
        self
    }

    pub fn with_decline_card(mut self, number: impl Into<String>) -> Self {
        self.declined_cards.insert(number.into());
        self
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, amount: Money, instrument: &PaymentInstrument) -> Result<PaymentResult> {
        let code = instrument.security_code();
        if !(3..=4).contains(&code.len()) || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(PaymentResult::declined("Invalid security code"));
        }
        if self.declined_cards.contains(instrument.number()) {
            return Ok(PaymentResult::declined("Card refused"));
        }
        if let Some(limit) = self.credit_limit
            && amount > limit
        {
            return Ok(PaymentResult::declined(format!(
                "Amount {} exceeds credit limit {}",
                amount, limit
            )));
        }
        debug!(%amount, "charge approved");
        Ok(PaymentResult::approved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn card(number: &str) -> PaymentInstrument {
        PaymentInstrument::new(number, "123")
    }

    #[tokio::test]
    async fn test_approves_by_default() {
        let gateway = SimulatedGateway::new();
        let result = gateway.charge(Money::new(dec!(100)), &card("1")).await.unwrap();
        assert_eq!(result, PaymentResult::approved());
    }

    #[tokio::test]
    async fn test_declines_listed_card() {
        let gateway = SimulatedGateway::new().with_decline_card("4000");
        let result = gateway.charge(Money::new(dec!(1)), &card("4000")).await.unwrap();
        assert!(!result.approved);
        assert_eq!(result.reason.as_deref(), Some("Card refused"));
    }

    #[tokio::test]
    async fn test_credit_limit_is_inclusive() {
        let gateway = SimulatedGateway::new().with_credit_limit(Money::new(dec!(100)));
        let at_limit = gateway.charge(Money::new(dec!(100)), &card("1")).await.unwrap();
        let over = gateway.charge(Money::new(dec!(100.01)), &card("1")).await.unwrap();
        assert!(at_limit.approved);
        assert!(!over.approved);
        assert!(over.reason.unwrap().contains("credit limit"));
    }

    #[tokio::test]
    async fn test_declines_malformed_security_code() {
        let gateway = SimulatedGateway::new();
        for code in ["", "12", "12345", "12a"] {
            let card = PaymentInstrument::new("4111", code);
            let result = gateway.charge(Money::new(dec!(1)), &card).await.unwrap();
            assert_eq!(result, PaymentResult::declined("Invalid security code"));
        }

        let amex = PaymentInstrument::new("3782", "1234");
        assert!(gateway.charge(Money::new(dec!(1)), &amex).await.unwrap().approved);
    }

    #[tokio::test]
    async fn test_zero_amount_is_approved() {
        let gateway = SimulatedGateway::new().with_credit_limit(Money::ZERO);
        let result = gateway.charge(Money::ZERO, &card("1")).await.unwrap();
        assert!(result.approved);
    }
}
