use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DieselRepository, ProductListQuery, ProductOrder, ProductReader, ProductWriter,
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(order) = query.order {
            items = match order {
                ProductOrder::PriceAsc => items.order(products::price.asc()),
            };
        }

        let items = items
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let created = diesel::insert_into(products::table)
            .values(db_product)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_product(
        &self,
        id: ProductId,
        product: &NewProduct,
    ) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        // Find-then-overwrite must not interleave with another writer, so
        // both steps share one transaction.
        let updated = conn.transaction::<Option<DbProduct>, diesel::result::Error, _>(|conn| {
            let existing = products::table
                .find(id.get())
                .first::<DbProduct>(conn)
                .optional()?;

            if existing.is_none() {
                return Ok(None);
            }

            diesel::update(products::table.find(id.get()))
                .set(db_product)
                .get_result::<DbProduct>(conn)
                .map(Some)
        })?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::delete(products::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
