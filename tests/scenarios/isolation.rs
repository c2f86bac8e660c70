//! Test: Isolation - the two application pipelines never touch each other

use crate::helpers::*;

/// Building digest neither creates, modifies, nor deletes anything under
/// sync's distribution and work directories, and vice versa.
#[tokio::test]
async fn test_digest_build_leaves_sync_untouched() {
    let project = TempProject::new();

    // Existing sync output from an earlier run
    let (sync_run, sync_result) = run_app(&project, sync_app()).await;
    let sync_report = sync_result.unwrap();
    let before = list_files(&sync_report.output_dir);
    let marker = sync_run.plan.work_dir.join("marker");
    std::fs::write(&marker, b"untouched").unwrap();

    let (_, digest_result) = run_app(&project, digest_app()).await;
    digest_result.unwrap();

    assert_eq!(list_files(&sync_report.output_dir), before);
    assert_eq!(std::fs::read(&marker).unwrap(), b"untouched");
    assert!(sync_report.output_dir.join("ftp_galaxy_2").is_file());
}

/// And the other direction: a sync build does not disturb digest output
#[tokio::test]
async fn test_sync_build_leaves_digest_untouched() {
    let project = TempProject::new();

    let (_, digest_result) = run_app(&project, digest_app()).await;
    let digest_report = digest_result.unwrap();
    let before = list_files(&digest_report.output_dir);

    let (_, sync_result) = run_app(&project, sync_app()).await;
    sync_result.unwrap();

    assert_eq!(list_files(&digest_report.output_dir), before);
}

/// Even a failing sync build cannot damage digest's bundle
#[tokio::test]
async fn test_failed_sync_build_leaves_digest_untouched() {
    let project = TempProject::new();

    let (_, digest_result) = run_app(&project, digest_app()).await;
    let digest_report = digest_result.unwrap();

    let (_, sync_result) =
        run_app_with(&project, sync_app(), MockPackager::failing(1)).await;
    assert!(sync_result.is_err());

    assert!(digest_report.output_dir.join("news_digest").is_file());
    assert!(digest_report.output_dir.join("config_digest.yaml").is_file());
}
