use std::fmt;

/// Card data handed to the payment gateway.
///
/// Opaque to the rest of the crate: it is neither serialized nor persisted, and its
/// `Debug` output never contains the card data.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentInstrument {
    number: String,
    security_code: String,
}

impl PaymentInstrument {
    pub fn new(number: impl Into<String>, security_code: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            security_code: security_code.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn security_code(&self) -> &str {
        &self.security_code
    }
}

impl fmt::Debug for PaymentInstrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentInstrument")
            .field("number", &"<redacted>")
            .field("security_code", &"<redacted>")
            .finish()
    }
}

/// Outcome of a charge attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentResult {
    pub approved: bool,
    /// Why the charge was declined, when the gateway says.
    pub reason: Option<String>,
}

impl PaymentResult {
    pub fn approved() -> Self {
        Self {
            approved: true,
            reason: None,
        }
    }

    pub fn declined(reason: impl Into<String>) -> Self {
        Self {
            approved: false,
            reason: Some(reason.into()),
        }
    }
}
