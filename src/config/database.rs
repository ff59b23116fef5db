//! Database configuration module.
//!
//! This module opens the `SeaORM` connection and creates the `products` table.
//! The table is generated with `Schema::create_table_from_entity`, so the
//! database schema always matches the entity definition without manual SQL.

use crate::entities::Product;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Default database location when neither the config file nor `DATABASE_URL` set one.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.sqlite?mode=rwc";

/// Establishes a connection to the database at `database_url`.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Opening database connection");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the `products` table if it does not exist yet.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut product_table = schema.create_table_from_entity(Product);
    product_table.if_not_exists();

    db.execute(builder.build(&product_table)).await?;
    info!("Database tables ensured.");

    Ok(())
}
