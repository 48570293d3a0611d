//! Wheel-Size API response types
//!
//! v2 responses usually wrap payloads in `{"data": [...]}`, but bare arrays
//! are tolerated too. Catalog entries carry a slug and a display name, with
//! fallbacks on both.

use serde::Deserialize;

/// Response envelope: `{"data": [...]}` or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Wrapped {
        #[serde(default)]
        data: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> Payload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Payload::Wrapped { data } => data,
            Payload::Bare(items) => items,
        }
    }
}

/// One entry from a catalog endpoint (years, models, modifications)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

impl CatalogEntry {
    /// Value submitted back to the API: the slug, falling back to the id
    pub fn id(&self) -> String {
        if let Some(slug) = &self.slug {
            return slug.clone();
        }
        match &self.id {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    /// Human-readable label: the name, falling back to the id
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => self.id(),
        }
    }
}

/// One vehicle from a fitment search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub wheels: Vec<AxlePair>,
}

/// Front/rear fitment for one OEM wheel option
#[derive(Debug, Clone, Deserialize)]
pub struct AxlePair {
    #[serde(default)]
    pub front: Option<WheelFitment>,
    #[serde(default)]
    pub rear: Option<WheelFitment>,
}

/// Tire designation for one axle
#[derive(Debug, Clone, Deserialize)]
pub struct WheelFitment {
    /// Full tire designation, e.g. "235/45ZR19 95W"
    #[serde(default)]
    pub tire_full: Option<String>,
}

impl SearchResult {
    /// All OEM tire designations for this vehicle, front then rear per axle
    /// pair. Rear entries only exist for staggered fitments and are always
    /// included when present.
    pub fn tire_sizes(&self) -> Vec<String> {
        let mut sizes = Vec::new();
        for pair in &self.wheels {
            if let Some(tire) = pair.front.as_ref().and_then(|w| w.tire_full.clone()) {
                sizes.push(tire);
            }
            if let Some(tire) = pair.rear.as_ref().and_then(|w| w.tire_full.clone()) {
                sizes.push(tire);
            }
        }
        sizes
    }
}
