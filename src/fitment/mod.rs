//! Fitment module - Wheel-Size API client and response types

pub mod client;
pub mod types;

pub use client::{FitmentClient, FitmentError, DEFAULT_API_BASE};
pub use types::{AxlePair, CatalogEntry, SearchResult, WheelFitment};
