//! CLI command implementations

pub mod completions;
pub mod init;
pub mod list;
pub mod lookup;
pub mod match_cmd;
pub mod new;
pub mod normalize;
pub mod show;
pub mod validate;
