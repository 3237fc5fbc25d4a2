//! Business rules for the product lifecycle and its queries.
//!
//! Every function here is the sole owner of its operation's consistency
//! boundary: mutations map to a single atomic store call, reads to a single
//! consistent snapshot. Identifiers arrive as raw `i32` from the HTTP layer;
//! a non-positive value can never name a persisted row, so it takes the same
//! path as an absent id.

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::repository::{ProductListQuery, ProductOrder, ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Insert a new product, returning it with the store-assigned id.
///
/// Field contents are not validated; the store schema is the only constraint
/// layer.
pub fn create_product<R>(product: NewProduct, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    Ok(repo.create_product(&product)?)
}

/// Return every stored product in store-native order.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    Ok(repo.list_products(ProductListQuery::default())?)
}

/// Look up a product by identifier.
///
/// Absence is a regular outcome, not an error: callers get `Ok(None)` for an
/// unknown id and must not treat it as a failure.
pub fn get_product<R>(id: i32, repo: &R) -> ServiceResult<Option<Product>>
where
    R: ProductReader,
{
    let Ok(id) = ProductId::new(id) else {
        return Ok(None);
    };
    Ok(repo.get_product_by_id(id)?)
}

/// Overwrite all mutable fields of an existing product.
///
/// The id itself never changes. A missing id fails with
/// [`ServiceError::NotFound`]; it never creates a record. Two concurrent
/// updates on one id are last-writer-wins under the wholesale overwrite.
pub fn update_product<R>(id: i32, product: NewProduct, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let id = ProductId::new(id).map_err(|_| ServiceError::NotFound)?;
    repo.update_product(id, &product)?
        .ok_or(ServiceError::NotFound)
}

/// Delete a product by identifier.
///
/// Deliberately idempotent: a missing id succeeds without effect, in
/// contrast to [`update_product`] which insists the record exists.
pub fn delete_product<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let Ok(id) = ProductId::new(id) else {
        return Ok(());
    };
    repo.delete_product(id)?;
    Ok(())
}

/// Report whether the product exists and has at least `count` units in stock.
///
/// `count` is not validated; zero and negative counts compare normally, so a
/// negative count against an existing product is trivially `true`.
pub fn check_stock<R>(id: i32, count: i32, repo: &R) -> ServiceResult<bool>
where
    R: ProductReader,
{
    let Ok(id) = ProductId::new(id) else {
        return Ok(false);
    };
    let product = repo.get_product_by_id(id)?;
    Ok(product.is_some_and(|p| p.quantity >= count))
}

/// Return all products ordered ascending by price.
///
/// Equal prices keep store-native order; no further tie-break is guaranteed.
pub fn list_products_by_price<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    Ok(repo.list_products(ProductListQuery::default().order_by(ProductOrder::PriceAsc))?)
}
