//! Product entity - the single resource served by the API.
//!
//! Each product has a store-assigned id, a name, a free-text description and a
//! price. The serialized form of [`Model`] is exactly the JSON object returned
//! by the list and get endpoints.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier, assigned by the database on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Coffee", "Movie Ticket")
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Unit price, used for range filtering and ordering
    pub price: f64,
}

/// Products have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
