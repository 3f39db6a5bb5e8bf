//! File system errors

use std::path::Path;

use super::AssetError;

/// Creates a file read failed error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> AssetError {
    AssetError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> AssetError {
    AssetError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a compressor failure error
pub fn compressor_failed(tool: impl Into<String>, reason: impl Into<String>) -> AssetError {
    AssetError::CompressorFailed {
        tool: tool.into(),
        reason: reason.into(),
    }
}
