//! Application definitions - what gets frozen and what ships alongside it

use serde::{Deserialize, Serialize};

/// One application the pipeline knows how to bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSpec {
    /// Application identifier (e.g. "digest", "sync")
    pub id: String,

    /// Name of the executable the packager produces
    pub executable: String,

    /// Build-specification file consumed by the packager,
    /// relative to the project root
    pub spec_file: String,

    /// Config file names staged from `SRC/GENERAL` into the bundle
    pub configs: Vec<String>,
}

impl AppSpec {
    pub fn new(
        id: impl Into<String>,
        executable: impl Into<String>,
        spec_file: impl Into<String>,
        configs: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            executable: executable.into(),
            spec_file: spec_file.into(),
            configs,
        }
    }
}

/// The two applications shipped by default: the news digest generator
/// and the FTP synchronization tool.
pub fn builtin_apps() -> Vec<AppSpec> {
    vec![
        AppSpec::new(
            "digest",
            "news_digest",
            "news_digest.spec",
            vec![
                "config_digest.yaml".to_string(),
                "config_descr.yaml".to_string(),
            ],
        ),
        AppSpec::new(
            "sync",
            "ftp_galaxy_2",
            "ftp_galaxy_2.spec",
            vec!["config_sync.yaml".to_string()],
        ),
    ]
}
