//! Typed request payloads for the product endpoints.
//!
//! Request bodies are loose JSON objects where any key may be missing or
//! `null`. Both cases deserialize to `None`; what `None` means depends on the
//! operation and is documented on each type.

use crate::errors::{Error, Result};
use serde::Deserialize;

/// Body of `POST /products`.
///
/// Omitted fields take the store defaults: empty `name`, empty `description`,
/// `price` of `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewProduct {
    /// Product name, empty when omitted
    pub name: Option<String>,
    /// Free-text description, empty when omitted
    pub description: Option<String>,
    /// Unit price, `0.0` when omitted
    pub price: Option<f64>,
}

/// Body of `PUT /products` and `PUT /products/{id}`.
///
/// For a single product, every `Some` field replaces the stored value and
/// every `None` keeps it. For the bulk path, see [`ProductChanges::truthy`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductChanges {
    /// New name, if any
    pub name: Option<String>,
    /// New description, if any
    pub description: Option<String>,
    /// New price, if any
    pub price: Option<f64>,
}

impl ProductChanges {
    /// Drops falsy values: empty strings and a zero price count as absent.
    ///
    /// The bulk update only touches columns that survive this filter.
    #[must_use]
    pub fn truthy(self) -> Self {
        Self {
            name: self.name.filter(|n| !n.is_empty()),
            description: self.description.filter(|d| !d.is_empty()),
            price: self.price.filter(|p| *p != 0.0),
        }
    }

    /// True when no field would be written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }
}

/// Half-open price interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound
    pub max: f64,
}

/// Raw `?min=&max=` query parameters of `GET /products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceRangeParams {
    /// Unparsed `min` value
    pub min: Option<String>,
    /// Unparsed `max` value
    pub max: Option<String>,
}

impl PriceRangeParams {
    /// Parses the bounds. Returns `None` unless both are given.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] when a given bound is not a finite number.
    pub fn into_range(self) -> Result<Option<PriceRange>> {
        let min = self.min.as_deref().map(|v| parse_bound("min", v)).transpose()?;
        let max = self.max.as_deref().map(|v| parse_bound("max", v)).transpose()?;

        Ok(match (min, max) {
            (Some(min), Some(max)) => Some(PriceRange { min, max }),
            _ => None,
        })
    }
}

fn parse_bound(name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            Error::invalid_input(format!(
                "query parameter '{name}' must be a number, got '{raw}'"
            ))
        })
}
