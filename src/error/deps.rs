//! Dependency errors

use super::AssetError;

/// Creates a circular dependency error for `name`, with the detected chain
pub fn circular(name: impl Into<String>, chain: impl Into<String>) -> AssetError {
    AssetError::CircularDependency {
        name: name.into(),
        chain: chain.into(),
    }
}

/// Creates an unknown bundle error
pub fn unknown_bundle(name: impl Into<String>, referrer: impl Into<String>) -> AssetError {
    AssetError::UnknownBundle {
        name: name.into(),
        referrer: referrer.into(),
    }
}

/// Creates an ambiguous ownership error
pub fn ambiguous_owner(
    bundle: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
) -> AssetError {
    AssetError::AmbiguousOwnership {
        bundle: bundle.into(),
        first: first.into(),
        second: second.into(),
    }
}
