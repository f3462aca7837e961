//! The product catalog the shop page sells from.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::cart::CartLineItem;
use crate::cart::ItemId;
use crate::price::Price;

const BUILTIN_CATALOG: &str = include_str!("../catalog.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog is not valid json: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("product id {0} appears more than once")]
    DuplicateId(ItemId),
}

/// A product offered for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ItemId,
    pub name: String,
    pub image_url: String,
    pub price: Price,
    #[serde(default)]
    pub blurb: String,
}

impl Product {
    /// Builds the cart line for buying `quantity` of this product.
    pub fn to_line_item(&self, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: self.id,
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            unit_price: self.price,
            quantity,
        }
    }
}

/// An ordered list of products with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog(Vec<Product>);

impl Catalog {
    /// Loads the catalog bundled with the application.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses a catalog from a json array of products.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.0
    }
}
