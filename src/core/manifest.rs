//! Bundle manifest loaded from YAML
//!
//! The two built-in applications cover the normal case; a `bundle.yaml`
//! manifest can replace the application table or change how the packager
//! is invoked without recompiling.

use crate::core::app::{builtin_apps, AppSpec};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level bundle manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleManifest {
    /// Applications to bundle
    pub apps: Vec<AppConfig>,

    /// Packager invocation overrides
    #[serde(default)]
    pub packager: Option<PackagerConfig>,
}

/// Application entry as defined in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Unique application identifier
    pub id: String,

    /// Executable name the packager produces
    pub executable: String,

    /// Build-specification file, relative to the project root
    pub spec: String,

    /// Config file names staged from the shared `GENERAL` directory
    pub configs: Vec<String>,
}

/// Packager settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagerConfig {
    /// Program to invoke (default "pyinstaller")
    #[serde(default)]
    pub program: Option<String>,

    /// Subprocess timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl BundleManifest {
    /// Load a manifest from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a manifest from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: BundleManifest = serde_yaml::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Manifest equivalent to the built-in application table
    pub fn builtin() -> Self {
        let apps = builtin_apps()
            .into_iter()
            .map(|a| AppConfig {
                id: a.id,
                executable: a.executable,
                spec: a.spec_file,
                configs: a.configs,
            })
            .collect();
        Self {
            apps,
            packager: None,
        }
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if self.apps.is_empty() {
            anyhow::bail!("Manifest defines no applications");
        }

        let mut seen_ids = std::collections::HashSet::new();
        for app in &self.apps {
            if app.id.is_empty() {
                anyhow::bail!("Application with empty id");
            }
            if !seen_ids.insert(&app.id) {
                anyhow::bail!("Duplicate application id: {}", app.id);
            }
            if app.executable.is_empty() {
                anyhow::bail!("Application '{}' has no executable name", app.id);
            }
            if app.spec.is_empty() {
                anyhow::bail!("Application '{}' has no spec file", app.id);
            }
            if app.configs.is_empty() {
                anyhow::bail!(
                    "Application '{}' stages no config files; the bundle would not start",
                    app.id
                );
            }
            for name in &app.configs {
                // Config entries are bare file names inside GENERAL,
                // never paths.
                if name.contains('/') || name.contains('\\') {
                    anyhow::bail!(
                        "Application '{}' config '{}' must be a bare file name",
                        app.id,
                        name
                    );
                }
            }
        }

        Ok(())
    }

    /// Convert to the domain application list
    pub fn to_apps(&self) -> Vec<AppSpec> {
        self.apps
            .iter()
            .map(|a| {
                AppSpec::new(
                    a.id.clone(),
                    a.executable.clone(),
                    a.spec.clone(),
                    a.configs.clone(),
                )
            })
            .collect()
    }

    /// Look up one application by id
    pub fn app(&self, id: &str) -> Option<AppSpec> {
        self.to_apps().into_iter().find(|a| a.id == id)
    }
}
