//! Treadfit: plain-text tire inventory with vehicle fitment matching
//!
//! A Unix-style toolkit for managing a tire inventory as markdown files with
//! YAML front-matter, matched against OEM fitment data from the Wheel-Size
//! API.

pub mod cli;
pub mod core;
pub mod fitment;
pub mod inventory;
