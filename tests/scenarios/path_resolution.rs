//! Test: Path Resolution - layout is independent of the working directory

use crate::helpers::*;
use distkit::core::{BuildPlan, ProjectLayout};
use std::path::PathBuf;

/// With an explicit absolute root, resolution is a pure function of that
/// root: every derived path hangs off it, so the layout and plan are the
/// same no matter where the process happens to be running.
#[test]
fn test_layout_independent_of_cwd() {
    let project = TempProject::new();
    let canonical = project.root().canonicalize().unwrap();

    let resolved = ProjectLayout::resolve(Some(project.root())).unwrap();
    assert_eq!(resolved, ProjectLayout::at_root(canonical.clone()));

    let plan = BuildPlan::new(&resolved, &digest_app());
    for path in [
        &plan.spec_path,
        &plan.dist_root,
        &plan.work_dir,
        &plan.output_dir,
    ] {
        assert!(path.is_absolute());
        assert!(
            path.starts_with(&canonical),
            "{} escapes the project root",
            path.display()
        );
    }

    // Repeating the resolution changes nothing
    assert_eq!(
        resolved,
        ProjectLayout::resolve(Some(project.root())).unwrap()
    );
}

/// The documented example: with the project rooted at /p, the digest
/// pipeline plans /p/dist_digest/news_digest as the bundle directory.
#[test]
fn test_example_scenario_paths() {
    let layout = ProjectLayout::at_root(PathBuf::from("/p"));
    let plan = BuildPlan::new(&layout, &digest_app());

    assert_eq!(plan.output_dir, PathBuf::from("/p/dist_digest/news_digest"));
    assert_eq!(plan.dist_root, PathBuf::from("/p/dist_digest"));
    assert_eq!(layout.source_dir, PathBuf::from("/p/SRC"));
    assert_eq!(layout.general_dir(), PathBuf::from("/p/SRC/GENERAL"));
}

/// A full digest run produces the documented bundle layout and reports
/// the bundle directory as its result.
#[tokio::test]
async fn test_example_scenario_bundle() {
    let project = TempProject::new();

    let (run, result) = run_app(&project, digest_app()).await;
    let report = result.unwrap();

    assert_eq!(report.output_dir, run.plan.dist_root.join("news_digest"));
    assert_eq!(
        list_files(&report.output_dir),
        vec!["config_descr.yaml", "config_digest.yaml", "news_digest"]
    );
}
