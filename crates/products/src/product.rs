use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use distributor_core::{DomainError, DomainResult, Entity, ProductId};

use crate::error::CatalogError;
use crate::source;

/// Single-character product category code (e.g. beer, wine, spirits,
/// non-alcoholic). The set of codes is not enforced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductClass(char);

impl ProductClass {
    pub const fn new(code: char) -> Self {
        Self(code)
    }

    pub const fn code(self) -> char {
        self.0
    }
}

impl core::fmt::Display for ProductClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<char> for ProductClass {
    fn from(value: char) -> Self {
        Self(value)
    }
}

/// A catalog entry.
///
/// Immutable once built: changing a product means inserting a new record under
/// the same id, which replaces every field of the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    status: bool,
    id: ProductId,
    supplier: String,
    brand: String,
    size: String,
    product_class: ProductClass,
    available: i32,
    sales: i32,
    last_received: i32,
}

impl Product {
    /// Build a product from its ten fields.
    ///
    /// No field is checked here; see [`Product::validate`] for the strict form.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        status: bool,
        id: ProductId,
        supplier: impl Into<String>,
        brand: impl Into<String>,
        size: impl Into<String>,
        product_class: ProductClass,
        available: i32,
        sales: i32,
        last_received: i32,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            id,
            supplier: supplier.into(),
            brand: brand.into(),
            size: size.into(),
            product_class,
            available,
            sales,
            last_received,
        }
    }

    /// Parse one tab-separated source line.
    pub fn from_source_line(line: &str) -> Result<Self, CatalogError> {
        source::parse_line(1, line)
    }

    /// Render back to the ten-field source form (`Active` / `Restricted`).
    pub fn to_source_line(&self) -> String {
        source::format_line(self)
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` when the product is active, `false` when restricted.
    pub fn status(&self) -> bool {
        self.status
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn product_class(&self) -> ProductClass {
        self.product_class
    }

    pub fn available(&self) -> i32 {
        self.available
    }

    pub fn sales(&self) -> i32 {
        self.sales
    }

    /// Last receipt date as the raw `YYYYMMDD` integer.
    pub fn last_received(&self) -> i32 {
        self.last_received
    }

    /// Decode `last_received` into a calendar date, if it names one.
    pub fn last_received_date(&self) -> Option<NaiveDate> {
        if self.last_received < 0 {
            return None;
        }
        let year = self.last_received / 10_000;
        let month = (self.last_received / 100 % 100) as u32;
        let day = (self.last_received % 100) as u32;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Strict check of the documented (but otherwise unenforced) constraints.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.id.is_canonical() {
            return Err(DomainError::validation(format!(
                "product id {} is not six digits",
                self.id
            )));
        }

        if !self.product_class.code().is_ascii_alphabetic() {
            return Err(DomainError::validation(format!(
                "product class {:?} is not a letter",
                self.product_class.code()
            )));
        }

        if self.available < 0 {
            return Err(DomainError::validation("available count cannot be negative"));
        }

        if self.sales < 0 {
            return Err(DomainError::validation("sales count cannot be negative"));
        }

        if self.last_received_date().is_none() {
            return Err(DomainError::validation(format!(
                "last received {} is not a YYYYMMDD date",
                self.last_received
            )));
        }

        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
