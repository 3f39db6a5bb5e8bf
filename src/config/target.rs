//! Target definitions from the configuration file

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A target definition as declared in configuration
///
/// `js` and `css` hold the output filename for that asset type and may
/// contain a `{ts}` placeholder. `depends` has no default: a target must
/// say which bundles it absorbs. `base_path` and `base_url` are checked
/// when the target is loaded, see [`crate::domain::Target::from_spec`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TargetSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,

    pub depends: Vec<String>,
}
