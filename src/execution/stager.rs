//! Config staging - copies runtime configuration next to the executable

use crate::execution::BuildError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Copy each named config from the shared configuration directory into
/// the final output directory, overwriting anything already there.
///
/// A missing source file is fatal: a bundle without its config would
/// start and then fail obscurely at the user's site, so the build must
/// not report success while silently omitting one. Order among the files
/// carries no meaning.
pub fn stage_configs(
    general_dir: &Path,
    configs: &[String],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, BuildError> {
    if !output_dir.is_dir() {
        return Err(BuildError::MissingOutputDir {
            path: output_dir.to_path_buf(),
        });
    }

    let mut staged = Vec::with_capacity(configs.len());
    for name in configs {
        let src = general_dir.join(name);
        if !src.is_file() {
            return Err(BuildError::MissingConfig { path: src });
        }

        let dest = output_dir.join(name);
        std::fs::copy(&src, &dest).map_err(|e| BuildError::Stage {
            name: name.clone(),
            dest: dest.clone(),
            source: e,
        })?;
        debug!("staged {} -> {}", name, dest.display());
        staged.push(dest);
    }

    Ok(staged)
}
