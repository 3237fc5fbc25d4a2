use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing products.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductListQuery {
    /// Ordering to apply; `None` keeps store-native order.
    pub order: Option<ProductOrder>,
}

/// Orderings the store can apply to a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOrder {
    /// Ascending by price. Ties resolve to store-native order.
    PriceAsc,
}

impl ProductListQuery {
    pub fn order_by(mut self, order: ProductOrder) -> Self {
        self.order = Some(order);
        self
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// List products matching the supplied query parameters.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations for product entities. Each method is individually atomic.
pub trait ProductWriter {
    /// Persist a new product, returning it with the store-assigned id.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Overwrite all mutable fields of an existing product in one
    /// transaction. Returns `None` when no row matches the id.
    fn update_product(&self, id: ProductId, product: &NewProduct)
    -> RepositoryResult<Option<Product>>;
    /// Delete a product, returning the number of rows removed.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}
