//! Subprocess packager backend - invokes the external freezer

use crate::packager::{PackageRequest, PackagerBackend, PackagerError};
use async_trait::async_trait;
use std::ffi::OsString;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Default packager program, assumed to be on PATH
pub const DEFAULT_PROGRAM: &str = "pyinstaller";

/// Default subprocess timeout. Freezing is slow but not unbounded; a hung
/// packager must not hang the whole build forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 900;

/// Packager backend that runs the external tool as a subprocess
#[derive(Debug, Clone)]
pub struct SubprocessPackager {
    /// Program to invoke (e.g. "pyinstaller", "/usr/local/bin/pyinstaller")
    program: String,

    /// Timeout for the subprocess in seconds
    timeout_secs: u64,
}

impl SubprocessPackager {
    pub fn new(program: String, timeout_secs: u64) -> Self {
        Self {
            program,
            timeout_secs,
        }
    }

    /// The fixed invocation contract: force-overwrite without prompting,
    /// errors-only logging, clean before build, and explicit dist/work
    /// path overrides so the tool never writes outside the run's plan.
    fn build_args(request: &PackageRequest) -> Vec<OsString> {
        vec![
            OsString::from("--noconfirm"),
            OsString::from("--clean"),
            OsString::from("--log-level"),
            OsString::from("ERROR"),
            OsString::from("--distpath"),
            request.dist_path.clone().into_os_string(),
            OsString::from("--workpath"),
            request.work_path.clone().into_os_string(),
            request.spec_path.clone().into_os_string(),
        ]
    }
}

impl Default for SubprocessPackager {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM.to_string(), DEFAULT_TIMEOUT_SECS)
    }
}

#[async_trait]
impl PackagerBackend for SubprocessPackager {
    async fn package(&self, request: &PackageRequest) -> Result<(), PackagerError> {
        debug!(
            "Spawning packager {} for spec {}",
            self.program,
            request.spec_path.display()
        );

        let timeout_duration = Duration::from_secs(self.timeout_secs);

        let result = timeout(
            timeout_duration,
            Command::new(&self.program)
                .args(Self::build_args(request))
                .current_dir(&request.project_root)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| PackagerError::Timeout(self.timeout_secs))?;

        let output = result.map_err(|e| PackagerError::Spawn {
            program: self.program.clone(),
            source: e,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let exit_code = output.status.code().unwrap_or(-1);
            warn!(
                "packager exited with code {}: {}",
                exit_code,
                stderr.trim()
            );
            return Err(PackagerError::NonZeroExit {
                code: exit_code,
                stderr: stderr.trim().to_string(),
            });
        }

        debug!(
            "packager finished, dist at {}",
            request.dist_path.display()
        );

        Ok(())
    }
}
