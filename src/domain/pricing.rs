use super::cart::{Cart, Tier};
use super::money::Money;
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Discount granted to premium customers, as a fraction of the cart total.
pub const PREMIUM_DISCOUNT: Decimal = dec!(0.10);

/// Tier-based pricing rules applied at checkout.
pub struct PricingPolicy;

impl PricingPolicy {
    /// Computes the amount to charge for `cart`.
    ///
    /// Premium owners pay the raw total minus `PREMIUM_DISCOUNT`; everyone else pays the
    /// raw total. No rounding is applied. Overflow is reported as a validation error.
    pub fn chargeable_amount(cart: &Cart) -> Result<Money> {
        let total = cart.total()?;
        match cart.owner().tier() {
            Tier::Premium => total.checked_scale(Decimal::ONE - PREMIUM_DISCOUNT),
            Tier::Standard => Ok(total),
        }
    }
}
