//! Inventory module - markdown tire records and the process-wide cache

pub mod frontmatter;
pub mod loader;
pub mod record;

pub use frontmatter::FrontmatterError;
pub use loader::{Inventory, SkippedFile};
pub use record::TireRecord;
