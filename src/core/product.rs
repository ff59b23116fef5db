//! Product record store - Handles all product persistence.
//!
//! [`ProductStore`] is the only persistence abstraction the HTTP layer depends
//! on. It is built once at startup around a `SeaORM` connection and cloned into
//! every request. All functions are async and return `Result` types; lookups of
//! a single product either hand back `Option` or fail with
//! [`Error::ProductNotFound`] so callers must deal with the missing case.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
    models::{NewProduct, PriceRange, ProductChanges},
};
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::Expr};
use tracing::{debug, info, instrument};

/// Handle to the product table.
#[derive(Clone, Debug)]
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Wraps an open database connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Closes the underlying connection pool.
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(Into::into)
    }

    /// Inserts a new product, filling omitted fields with the store defaults.
    ///
    /// # Errors
    /// Returns an error if the database insert fails.
    #[instrument(skip(self))]
    pub async fn insert(&self, new: NewProduct) -> Result<product::Model> {
        let product = product::ActiveModel {
            name: Set(new.name.unwrap_or_default()),
            description: Set(new.description.unwrap_or_default()),
            price: Set(new.price.unwrap_or_default()),
            ..Default::default()
        };
        let created = product.insert(&self.db).await?;
        info!(id = created.id, "Product created");
        Ok(created)
    }

    /// Retrieves a product by its id, or `None` if there is no such product.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn get(&self, product_id: i64) -> Result<Option<product::Model>> {
        Product::find_by_id(product_id)
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    /// Retrieves a product by its id, failing if it does not exist.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] if the id is unknown, or a database error.
    pub async fn get_existing(&self, product_id: i64) -> Result<product::Model> {
        self.get(product_id)
            .await?
            .ok_or(Error::ProductNotFound { id: product_id })
    }

    /// Merges `changes` into one product: `Some` fields replace, `None` fields keep.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] if the id is unknown, or a database error.
    #[instrument(skip(self))]
    pub async fn update_one(
        &self,
        product_id: i64,
        changes: ProductChanges,
    ) -> Result<product::Model> {
        let existing = self.get_existing(product_id).await?;

        let product = product::ActiveModel {
            id: Set(existing.id),
            name: Set(changes.name.unwrap_or(existing.name)),
            description: Set(changes.description.unwrap_or(existing.description)),
            price: Set(changes.price.unwrap_or(existing.price)),
        };

        let updated = product
            .update(&self.db)
            .await
            .map_err(|e| update_error(e, product_id))?;
        info!(id = updated.id, "Product updated");
        Ok(updated)
    }

    /// Writes every `Some` field of `changes` onto every product.
    ///
    /// Runs as a single `UPDATE` statement, so either all chosen columns change
    /// on all rows or none do. Returns the number of rows affected; when
    /// `changes` is empty nothing is written and `0` is returned.
    ///
    /// # Errors
    /// Returns an error if the database update fails.
    #[instrument(skip(self))]
    pub async fn update_many(&self, changes: ProductChanges) -> Result<u64> {
        if changes.is_empty() {
            debug!("Bulk update with no fields, skipping");
            return Ok(0);
        }

        let mut update = Product::update_many();
        if let Some(name) = changes.name {
            update = update.col_expr(product::Column::Name, Expr::value(name));
        }
        if let Some(description) = changes.description {
            update = update.col_expr(product::Column::Description, Expr::value(description));
        }
        if let Some(price) = changes.price {
            update = update.col_expr(product::Column::Price, Expr::value(price));
        }

        let result = update.exec(&self.db).await?;
        info!(rows = result.rows_affected, "Bulk product update applied");
        Ok(result.rows_affected)
    }

    /// Deletes a product permanently, returning the row as it was.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] if the id is unknown, or a database error.
    #[instrument(skip(self))]
    pub async fn delete(&self, product_id: i64) -> Result<product::Model> {
        let existing = self.get_existing(product_id).await?;

        let result = Product::delete_by_id(existing.id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            // Removed by a concurrent request between the lookup and the delete.
            return Err(Error::ProductNotFound { id: product_id });
        }

        info!(id = existing.id, "Product deleted");
        Ok(existing)
    }

    /// Lists products ordered by ascending price, optionally restricted to `range`.
    ///
    /// Products with equal prices are ordered by id.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn query(&self, range: Option<PriceRange>) -> Result<Vec<product::Model>> {
        let mut select = Product::find();
        if let Some(range) = range {
            select = select
                .filter(product::Column::Price.gte(range.min))
                .filter(product::Column::Price.lt(range.max));
        }

        select
            .order_by_asc(product::Column::Price)
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }
}

/// A row removed between lookup and update surfaces as `RecordNotUpdated`.
fn update_error(err: DbErr, product_id: i64) -> Error {
    match err {
        DbErr::RecordNotUpdated => Error::ProductNotFound { id: product_id },
        other => Error::Database(other),
    }
}
