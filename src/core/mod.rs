//! Core module - fundamental types and utilities

pub mod config;
pub mod matcher;
pub mod project;
pub mod size;

pub use config::Config;
pub use matcher::{match_inventory, wanted_sizes, MatchReport};
pub use project::{Manifest, Project, ProjectError};
pub use size::{normalize, SizeParseError, TireSize};
