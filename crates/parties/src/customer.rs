use serde::{Deserialize, Serialize};

use distributor_core::ValueObject;

/// A customer as submitted by the new-customer form.
///
/// Carries no identity of its own; the `customer` table assigns one (or not).
/// Fields are stored exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl NewCustomer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}

impl ValueObject for NewCustomer {}
