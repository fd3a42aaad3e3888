//! Product types stored in the catalog.

use crate::{Quantity, Sku};
use serde::{Deserialize, Serialize};

/// A product record in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique stock-keeping unit, fixed once the product is created
    pub sku: Sku,
    /// Display title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Units in stock
    pub qty: Quantity,
}

impl Product {
    /// Create a new product.
    pub fn new(
        sku: impl Into<Sku>,
        title: impl Into<String>,
        description: impl Into<String>,
        qty: Quantity,
    ) -> Self {
        Self {
            sku: sku.into(),
            title: title.into(),
            description: description.into(),
            qty,
        }
    }

    /// Merge a patch into this product.
    ///
    /// Only the fields present in `patch` are overwritten. The SKU is never
    /// touched since [`ProductPatch`] has no way to carry one.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(qty) = patch.qty {
            self.qty = qty;
        }
    }
}

/// A partial update for a product.
///
/// Absent fields leave the stored value unchanged. Unknown keys in an incoming
/// document (including `sku`) are ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<Quantity>,
}

impl ProductPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the quantity.
    pub fn qty(mut self, qty: Quantity) -> Self {
        self.qty = Some(qty);
        self
    }

    /// Check if the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.qty.is_none()
    }
}
