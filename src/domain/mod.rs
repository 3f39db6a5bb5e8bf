//! Domain models for assetpack
//!
//! This module contains pure domain objects: bundles as registered, targets
//! as loaded from configuration, and targets after their outputs are built.
//! They are plain value records; each pipeline stage produces new values
//! instead of mutating earlier ones.

pub mod asset;
pub mod bundle;
pub mod target;

pub use asset::AssetKind;
pub use bundle::Bundle;
pub use target::{BuiltTarget, Target};
