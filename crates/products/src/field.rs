//! Field selectors for projecting one attribute across the catalog.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// One of the ten product attributes.
///
/// Used by [`Catalog::project`](crate::Catalog::project) to pick which value is
/// rendered per product, and by the source parser to name the offending column
/// in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Id,
    Name,
    Status,
    Supplier,
    Brand,
    Size,
    Class,
    Available,
    Sales,
    LastReceived,
}

impl ProductField {
    pub const ALL: [ProductField; 10] = [
        ProductField::Id,
        ProductField::Name,
        ProductField::Status,
        ProductField::Supplier,
        ProductField::Brand,
        ProductField::Size,
        ProductField::Class,
        ProductField::Available,
        ProductField::Sales,
        ProductField::LastReceived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Id => "id",
            ProductField::Name => "name",
            ProductField::Status => "status",
            ProductField::Supplier => "supplier",
            ProductField::Brand => "brand",
            ProductField::Size => "size",
            ProductField::Class => "class",
            ProductField::Available => "available",
            ProductField::Sales => "sales",
            ProductField::LastReceived => "last_received",
        }
    }

    /// Render this field of `product` as its raw display value.
    ///
    /// Integers are decimal, the class is its single character, status is
    /// `true`/`false`.
    pub fn render(self, product: &Product) -> String {
        match self {
            ProductField::Id => product.id_typed().to_string(),
            ProductField::Name => product.name().to_string(),
            ProductField::Status => product.status().to_string(),
            ProductField::Supplier => product.supplier().to_string(),
            ProductField::Brand => product.brand().to_string(),
            ProductField::Size => product.size().to_string(),
            ProductField::Class => product.product_class().to_string(),
            ProductField::Available => product.available().to_string(),
            ProductField::Sales => product.sales().to_string(),
            ProductField::LastReceived => product.last_received().to_string(),
        }
    }
}

impl core::fmt::Display for ProductField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
