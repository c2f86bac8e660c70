//! Test: Clean Rebuild - no artifact from one build survives into the next

use crate::helpers::*;
use distkit::core::AppSpec;

/// Two successive runs yield exactly the same bundle file set, even when
/// the first run used a different build specification (and so produced a
/// differently named executable).
#[tokio::test]
async fn test_rebuild_leaves_exact_file_set() {
    let project = TempProject::new();

    // First run: an older spec variant that froze a different executable
    project.write_spec("old_digest.spec");
    let old_app = AppSpec::new(
        "digest",
        "old_digest",
        "old_digest.spec",
        vec!["config_digest.yaml".to_string()],
    );
    let (run1, result1) = run_app(&project, old_app).await;
    result1.expect("first run should succeed");
    assert!(run1.plan.dist_root.join("old_digest/old_digest").is_file());

    // Second run: the current digest definition, same dist root
    let (run2, result2) = run_app(&project, digest_app()).await;
    let report = result2.expect("second run should succeed");

    // The stale old_digest bundle must be gone entirely
    assert_eq!(list_files(&run2.plan.dist_root), vec!["news_digest"]);
    assert_eq!(
        list_files(&report.output_dir),
        vec!["config_descr.yaml", "config_digest.yaml", "news_digest"]
    );
}

/// Running the same build twice is idempotent: identical file set both times
#[tokio::test]
async fn test_same_build_twice_is_idempotent() {
    let project = TempProject::new();

    let (_, result1) = run_app(&project, digest_app()).await;
    let first = list_files(&result1.unwrap().output_dir);

    let (_, result2) = run_app(&project, digest_app()).await;
    let second = list_files(&result2.unwrap().output_dir);

    assert_eq!(first, second);
}

/// Files planted in the dist and work roots between runs do not survive
#[tokio::test]
async fn test_planted_stale_files_are_removed() {
    let project = TempProject::new();

    let (run1, result1) = run_app(&project, digest_app()).await;
    result1.unwrap();

    // Simulate leftovers a packaging tool might strand: a renamed "third"
    // executable and scratch output
    let third = run1.plan.dist_root.join("third_exe");
    std::fs::create_dir_all(&third).unwrap();
    std::fs::write(third.join("third_exe"), b"stale").unwrap();
    std::fs::write(run1.plan.work_dir.join("leftover.o"), b"stale").unwrap();

    let (run2, result2) = run_app(&project, digest_app()).await;
    result2.unwrap();

    assert!(!third.exists());
    assert!(!run2.plan.work_dir.join("leftover.o").exists());
    assert_eq!(list_files(&run2.plan.dist_root), vec!["news_digest"]);
}
