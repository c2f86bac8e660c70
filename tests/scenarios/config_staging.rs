//! Test: Config Staging - completeness and fidelity of staged configs

use crate::helpers::*;
use distkit::core::RunPhase;
use distkit::execution::BuildError;

/// Every required config lands in the bundle, byte-identical to its source
#[tokio::test]
async fn test_configs_complete_and_identical() {
    let project = TempProject::new();
    project.write_config("config_digest.yaml", b"feeds:\n  - world\n  - local\n");

    let (_, result) = run_app(&project, digest_app()).await;
    let report = result.unwrap();

    for name in &digest_app().configs {
        let staged = report.output_dir.join(name);
        assert!(staged.is_file(), "{} should be staged", name);
        assert_eq!(
            std::fs::read(&staged).unwrap(),
            std::fs::read(project.general_dir().join(name)).unwrap(),
            "{} should be byte-identical to its source",
            name
        );
    }
    assert_eq!(report.staged_configs.len(), digest_app().configs.len());
}

/// A missing required config fails the build instead of producing a
/// bundle that would not start.
#[tokio::test]
async fn test_missing_config_is_fatal() {
    let project = TempProject::new();
    project.remove_config("config_descr.yaml");

    let (run, result) = run_app(&project, digest_app()).await;

    match result {
        Err(BuildError::MissingConfig { path }) => {
            assert!(path.ends_with("config_descr.yaml"));
        }
        other => panic!("expected missing config error, got {:?}", other),
    }
    assert_eq!(run.state.phase, RunPhase::Aborted);
}

/// The sync app stages its own config set, independent of digest's
#[tokio::test]
async fn test_sync_configs_staged() {
    let project = TempProject::new();

    let (_, result) = run_app(&project, sync_app()).await;
    let report = result.unwrap();

    assert_eq!(
        list_files(&report.output_dir),
        vec!["config_sync.yaml", "ftp_galaxy_2"]
    );
}
