//! Command implementations for assetpack CLI

pub mod completions;
pub mod compress;
pub mod version;
