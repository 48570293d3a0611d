//! Tire record - one markdown file's front-matter
//!
//! Field names are camelCase on the wire, matching the storefront's
//! `tires.json` contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::size::{normalize, TireSize};

/// One inventory record, keyed by SKU
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireRecord {
    /// Unique stock-keeping unit, e.g. "TIRE-9F2K41B7"
    pub sku: String,

    /// Display title for the product page
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Tire brand, e.g. "Michelin"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub brand: String,

    /// Tire model, e.g. "Pilot Sport 4S"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,

    /// Unit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Image references; the first is the primary product shot
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    /// Manufacturer size string, e.g. "235/45ZR19 95W"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub size: String,

    /// Section width in mm (used when `size` is absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,

    /// Aspect ratio (used when `size` is absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<u8>,

    /// Rim diameter in inches (used when `size` is absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rim: Option<u8>,

    /// Stock flag; absent means in stock
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    /// Date the record was added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Detail-page URL, derived from the SKU when absent
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Canonical size, derived at load time and never read from disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_norm: Option<TireSize>,
}

fn default_in_stock() -> bool {
    true
}

impl Default for TireRecord {
    fn default() -> Self {
        TireRecord {
            sku: String::new(),
            title: String::new(),
            brand: String::new(),
            model: String::new(),
            price: None,
            images: Vec::new(),
            size: String::new(),
            width: None,
            aspect: None,
            rim: None,
            in_stock: true,
            date: None,
            url: String::new(),
            size_norm: None,
        }
    }
}

impl TireRecord {
    /// Raw size string: the explicit `size` field, else composed from the
    /// width/aspect/rim triplet, else empty. An empty raw size means the
    /// record can never match a fitment.
    pub fn raw_size(&self) -> String {
        if !self.size.is_empty() {
            return self.size.clone();
        }
        match (self.width, self.aspect, self.rim) {
            (Some(w), Some(a), Some(r)) => format!("{}/{}R{}", w, a, r),
            _ => String::new(),
        }
    }

    /// Fill in the derived fields after deserialization
    pub(crate) fn finalize(&mut self) {
        self.size_norm = normalize(&self.raw_size());
        if self.url.is_empty() {
            self.url = format!("/tires/{}/", self.sku);
        }
    }
}
