use alloc::string::String;

use crate::scalar::Amount;

/// Payment fields encoded into a BR Code.
///
/// Empty `description` and `transaction_id` mean "absent". An absent `amount` encodes as `0.00`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodingRequest {
    /// Pix key (CPF/CNPJ, email, phone number or random key). Not format-checked.
    pub key: String,
    /// Receiver name.
    pub name: String,
    /// Receiver city.
    pub city: String,
    /// Transaction amount.
    #[cfg_attr(feature = "serde", serde(default))]
    pub amount: Option<f64>,
    /// Free-text description shown to the payer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Transaction id (reference label).
    #[cfg_attr(feature = "serde", serde(default))]
    pub transaction_id: String,
}

impl EncodingRequest {
    /// Construct a request with the required fields.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            city: city.into(),
            ..Self::default()
        }
    }

    /// Set the amount.
    #[must_use]
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the transaction id.
    #[must_use]
    pub fn with_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = transaction_id.into();
        self
    }

    /// The amount to encode, defaulting to zero.
    #[must_use]
    pub fn amount_or_zero(&self) -> Amount {
        self.amount.map_or(Amount::ZERO, Amount::new)
    }
}
