//! Configuration errors

use super::AssetError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AssetError {
    AssetError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown top-level option error
pub fn unknown_option(name: impl Into<String>) -> AssetError {
    AssetError::UnknownOption { name: name.into() }
}

/// Creates a missing mandatory option error, e.g. `basePath` for a target
pub fn missing_option(option: impl Into<String>, owner: impl Into<String>) -> AssetError {
    AssetError::MissingOption {
        option: option.into(),
        owner: owner.into(),
    }
}

/// Creates a bundle/target name collision error
pub fn name_collision(name: impl Into<String>) -> AssetError {
    AssetError::NameCollision { name: name.into() }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> AssetError {
    AssetError::ConfigInvalid {
        message: message.into(),
    }
}
