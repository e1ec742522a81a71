//! Failure propagation and precondition checks

use byttbranch::{Config, SENTINEL_COMMIT_MESSAGE, WorkflowError, switch_branch};
use tempfile::TempDir;

use crate::common::{TestFixture, current_branch, head_subject};

#[test]
fn test_pull_without_upstream_fails_and_keeps_sentinel_commit()
-> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::without_upstream()?;
    fixture.write("README.md", "# Test Repository\n\nunsaved\n")?;

    let result = switch_branch(&fixture.config(), "feature/x");

    match result {
        Err(WorkflowError::CommandFailed { command, .. }) => assert_eq!(command, "git pull"),
        other => return Err(format!("expected pull to fail, got {other:?}").into()),
    }
    assert_eq!(current_branch(&fixture.repo_path)?, "main");
    assert_eq!(head_subject(&fixture.repo_path)?, SENTINEL_COMMIT_MESSAGE);
    Ok(())
}

#[test]
fn test_missing_main_branch_fails_checkout() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let config = Config {
        main_branch: "trunk".to_string(),
        ..fixture.config()
    };

    let result = switch_branch(&config, "feature/x");

    match result {
        Err(WorkflowError::CommandFailed { command, .. }) => {
            assert_eq!(command, "git checkout trunk");
        }
        other => return Err(format!("expected checkout to fail, got {other:?}").into()),
    }
    assert_eq!(current_branch(&fixture.repo_path)?, "main");
    Ok(())
}

#[test]
fn test_non_repository_is_rejected_up_front() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config = Config {
        directory: temp_dir.path().to_path_buf(),
        ..Config::default()
    };

    let result = switch_branch(&config, "feature/x");

    match result {
        Err(error) => assert!(error.is_precondition()),
        Ok(summary) => return Err(format!("expected precondition error, got {summary:?}").into()),
    }
    Ok(())
}

#[test]
fn test_blank_target_is_rejected_up_front() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;

    let result = switch_branch(&fixture.config(), " ");

    assert!(matches!(
        result,
        Err(WorkflowError::InvalidBranchName { .. })
    ));
    assert_eq!(current_branch(&fixture.repo_path)?, "main");
    Ok(())
}
