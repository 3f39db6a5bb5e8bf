//! Asset types handled by the builder

use std::fmt;

/// Kind of asset a file list holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Script,
    Style,
}

impl AssetKind {
    /// All asset kinds, in build order
    pub const ALL: [AssetKind; 2] = [AssetKind::Script, AssetKind::Style];

    /// Key used for this kind in configuration and manifests
    pub fn key(self) -> &'static str {
        match self {
            AssetKind::Script => "js",
            AssetKind::Style => "css",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
