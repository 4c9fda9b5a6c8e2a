//! In-memory product catalog keyed by [`ProductId`].
//!
//! Iteration order is **load order**: the position at which an id was first
//! inserted. Overwriting an id keeps its position; removing an id closes the
//! gap without reordering the rest. Every "first N" listing follows this order.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, instrument, warn};

use distributor_core::ProductId;

use crate::error::CatalogError;
use crate::field::ProductField;
use crate::product::{Product, ProductClass};
use crate::source;

/// Owned product catalog.
///
/// Not synchronized: one owner performs loads and mutations. Share it behind a
/// lock if several threads need it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: IndexMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load products from a tab-separated file.
    ///
    /// Returns the number of records applied. If the file cannot be opened, or
    /// is not a regular file, the error is [`CatalogError::SourceNotFound`]; if
    /// any line is malformed the error is [`CatalogError::MalformedRecord`]. In
    /// both cases the catalog is left exactly as it was.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, CatalogError> {
        let path = path.as_ref();
        let file = open_source(path).map_err(|source| {
            warn!(error = %source, "catalog source not found");
            CatalogError::SourceNotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;

        self.load_from_reader(BufReader::new(file))
    }

    /// Bulk-load products from any buffered reader. Same semantics as
    /// [`Catalog::load_from_file`].
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize, CatalogError> {
        let records = source::read_records(reader).inspect_err(|e| {
            warn!(error = %e, "catalog load aborted; catalog unchanged");
        })?;

        let count = records.len();
        for product in records {
            self.add_product(product);
        }

        debug!(records = count, size = self.len(), "catalog loaded");
        Ok(count)
    }

    /// Insert or replace the product under its id. Returns the replaced record.
    pub fn add_product(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.id_typed(), product)
    }

    /// Field-list form of [`Catalog::add_product`].
    #[allow(clippy::too_many_arguments)]
    pub fn add_product_fields(
        &mut self,
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
    ) -> Option<Product> {
        self.add_product(Product::new(
            name,
            status,
            id,
            supplier,
            brand,
            size,
            product_class,
            available,
            sales,
            last_received,
        ))
    }

    /// Remove the product with `id`. Absent ids are ignored.
    pub fn remove_product(&mut self, id: ProductId) -> Option<Product> {
        self.products.shift_remove(&id)
    }

    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    /// All ids, in load order.
    pub fn list_ids(&self) -> Vec<ProductId> {
        self.products.keys().copied().collect()
    }

    /// The first `count` ids, one per line.
    pub fn id_list(&self, count: usize) -> String {
        self.list_field(ProductField::Id, count)
    }

    /// Render `field` for the first `count` products (fewer if the catalog is
    /// smaller).
    pub fn project(&self, field: ProductField, count: usize) -> Vec<String> {
        self.products
            .values()
            .take(count)
            .map(|product| field.render(product))
            .collect()
    }

    /// [`Catalog::project`] joined for display: each value followed by `\n`.
    pub fn list_field(&self, field: ProductField, count: usize) -> String {
        self.project(field, count)
            .into_iter()
            .fold(String::new(), |mut out, value| {
                out.push_str(&value);
                out.push('\n');
                out
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Drop every product.
    pub fn clear(&mut self) {
        self.products.clear();
    }
}

/// Open `path` for reading, refusing anything that is not a regular file.
fn open_source(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if !file.metadata()?.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "catalog source is not a regular file",
        ));
    }
    Ok(file)
}

impl Extend<Product> for Catalog {
    fn extend<T: IntoIterator<Item = Product>>(&mut self, iter: T) {
        for product in iter {
            self.add_product(product);
        }
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<T: IntoIterator<Item = Product>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}
