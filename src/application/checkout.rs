use crate::domain::cart::Cart;
use crate::domain::order::{Order, OrderId};
use crate::domain::payment::PaymentInstrument;
use crate::domain::ports::{NotifierBox, OrderRepositoryBox, PaymentGatewayBox};
use crate::domain::pricing::PricingPolicy;
use crate::error::{CheckoutError, Result};
use tracing::{debug, info, warn};

/// Subject line of the confirmation sent after a successful checkout.
pub const CONFIRMATION_SUBJECT: &str = "Seu Pedido foi Aprovado!";

/// Builds the confirmation message body for a persisted order.
///
/// The total is written exactly as charged, without rounding.
pub fn confirmation_body(id: OrderId, order: &Order) -> String {
    format!(
        "Olá {}, seu pedido #{} foi aprovado. Total: {}.",
        order.owner.name(),
        id,
        order.final_total
    )
}

/// Turns a cart and a payment instrument into a persisted order.
///
/// `CheckoutService` owns its collaborators and holds no other state, so a single
/// instance can serve any number of independent checkouts. Each call runs
/// charge, save and notify strictly in that order, awaiting every step.
pub struct CheckoutService {
    gateway: PaymentGatewayBox,
    repository: OrderRepositoryBox,
    notifier: NotifierBox,
}

impl CheckoutService {
    /// Creates a new `CheckoutService` instance.
    ///
    /// # Arguments
    ///
    /// * `gateway` - Authorizes the charge.
    /// * `repository` - Persists approved orders.
    /// * `notifier` - Sends the confirmation to the customer.
    pub fn new(
        gateway: PaymentGatewayBox,
        repository: OrderRepositoryBox,
        notifier: NotifierBox,
    ) -> Self {
        Self {
            gateway,
            repository,
            notifier,
        }
    }

    /// Processes a checkout.
    ///
    /// Returns `Ok(None)` when the gateway declines the charge; in that case nothing is
    /// persisted and no notification is sent. Returns the identified order on approval.
    /// Errors raised by any collaborator are propagated as-is.
    pub async fn process_order(
        &self,
        cart: &Cart,
        instrument: &PaymentInstrument,
    ) -> Result<Option<Order>> {
        let amount = PricingPolicy::chargeable_amount(cart)?;
        if cart.is_empty() {
            debug!(user = cart.owner().id(), "charging empty cart");
        }

        let payment = self.gateway.charge(amount, instrument).await?;
        if !payment.approved {
            info!(
                user = cart.owner().id(),
                %amount,
                reason = payment.reason.as_deref().unwrap_or("unspecified"),
                "payment declined"
            );
            return Ok(None);
        }

        let order = Order::processed(cart.owner().clone(), amount);
        let order = self.repository.save(order).await?;
        let id = order.id.ok_or_else(|| {
            CheckoutError::RepositoryError("saved order has no identity".to_string())
        })?;
        info!(order = %id, user = order.owner.id(), %amount, "order processed");

        let body = confirmation_body(id, &order);
        let delivered = self
            .notifier
            .send(order.owner.email(), CONFIRMATION_SUBJECT, &body)
            .await?;
        if !delivered {
            warn!(order = %id, "confirmation was not delivered");
        }

        Ok(Some(order))
    }
}
