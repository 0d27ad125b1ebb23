//! Machine configuration documents.
//!
//! Configurations are plain serde values, so they can come from any source a
//! caller can deserialize. JSON helpers are provided for the common case.

use super::error::BuildError;
use super::machine::{CatalogBuilder, SingleItemBuilder};
use crate::catalog::Item;
use crate::engine::{MultiItemMachine, SingleItemMachine};
use serde::{Deserialize, Serialize};

/// Configuration of a single-item machine.
///
/// ```
/// use vendomat::builder::SingleItemConfig;
///
/// let config = SingleItemConfig::from_json(r#"{ "price": 20, "stock": 2 }"#).unwrap();
/// let machine = config.build().unwrap();
/// assert_eq!(machine.catalog().stock(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SingleItemConfig {
    pub price: u64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl SingleItemConfig {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn builder(&self) -> SingleItemBuilder {
        let builder = SingleItemBuilder::new().price(self.price).stock(self.stock);
        match self.history_limit {
            Some(limit) => builder.history_limit(limit),
            None => builder,
        }
    }

    pub fn build(&self) -> Result<SingleItemMachine, BuildError> {
        self.builder().build()
    }
}

/// Configuration of a multi-item machine.
///
/// ```
/// use vendomat::builder::CatalogConfig;
///
/// let config = CatalogConfig::from_json(
///     r#"{
///         "history_limit": 32,
///         "items": [
///             { "id": "Water", "price": 20, "quantity": 1 },
///             { "id": "Chips", "price": 15, "quantity": 2 }
///         ]
///     }"#,
/// )
/// .unwrap();
/// let machine = config.build().unwrap();
/// assert_eq!(machine.catalog().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn builder(&self) -> CatalogBuilder {
        let builder = CatalogBuilder::new().items(self.items.iter().cloned());
        match self.history_limit {
            Some(limit) => builder.history_limit(limit),
            None => builder,
        }
    }

    pub fn build(&self) -> Result<MultiItemMachine, BuildError> {
        self.builder().build()
    }
}
