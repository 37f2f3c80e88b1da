//! Application layer containing the checkout orchestration.
//!
//! This module defines the `CheckoutService`, which prices a cart, charges the payment
//! gateway and, on approval, persists the order and notifies the customer.

pub mod checkout;
