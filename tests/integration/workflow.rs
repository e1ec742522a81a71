//! End-to-end branch switches against real repositories

use byttbranch::{Outcome, SENTINEL_COMMIT_MESSAGE, switch_branch};

use crate::common::{TestFixture, current_branch, git, head_subject, is_dirty};

#[test]
fn test_dirty_tree_new_branch_carries_work_as_sentinel_commit()
-> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.write("README.md", "# Test Repository\n\nwork in progress\n")?;

    let summary = switch_branch(&fixture.config(), "feature/x")?;

    assert!(summary.protected_changes);
    assert_eq!(summary.outcome, Outcome::NewBranchCreated);
    assert_eq!(current_branch(&fixture.repo_path)?, "feature/x");
    assert_eq!(head_subject(&fixture.repo_path)?, SENTINEL_COMMIT_MESSAGE);
    assert!(!is_dirty(&fixture.repo_path)?);
    assert!(fixture.read("README.md")?.contains("work in progress"));
    Ok(())
}

#[test]
fn test_existing_branch_with_sentinel_tip_is_rewound() -> Result<(), Box<dyn std::error::Error>>
{
    let fixture = TestFixture::new()?;
    fixture.branch_with_commit("feature/x", SENTINEL_COMMIT_MESSAGE)?;

    let summary = switch_branch(&fixture.config(), "feature/x")?;

    assert!(!summary.protected_changes);
    assert_eq!(summary.outcome, Outcome::Rewound);
    assert_eq!(current_branch(&fixture.repo_path)?, "feature/x");
    assert_eq!(head_subject(&fixture.repo_path)?, "Initial commit");
    assert!(is_dirty(&fixture.repo_path)?);
    assert!(
        fixture
            .read("README.md")?
            .contains(SENTINEL_COMMIT_MESSAGE)
    );
    Ok(())
}

#[test]
fn test_existing_branch_with_user_tip_is_left_alone() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.branch_with_commit("feature/x", "Add feature x")?;

    let summary = switch_branch(&fixture.config(), "feature/x")?;

    assert_eq!(summary.outcome, Outcome::Unchanged);
    assert_eq!(current_branch(&fixture.repo_path)?, "feature/x");
    assert_eq!(head_subject(&fixture.repo_path)?, "Add feature x");
    assert!(!is_dirty(&fixture.repo_path)?);
    Ok(())
}

#[test]
fn test_second_run_leaves_head_where_first_run_put_it() -> Result<(), Box<dyn std::error::Error>>
{
    let fixture = TestFixture::new()?;
    fixture.branch_with_commit("feature/x", SENTINEL_COMMIT_MESSAGE)?;

    switch_branch(&fixture.config(), "feature/x")?;
    let head_after_first = git(&fixture.repo_path, &["rev-parse", "HEAD"])?;
    let contents_after_first = fixture.read("README.md")?;

    switch_branch(&fixture.config(), "feature/x")?;

    assert_eq!(
        git(&fixture.repo_path, &["rev-parse", "HEAD"])?,
        head_after_first
    );
    assert_eq!(fixture.read("README.md")?, contents_after_first);
    assert!(is_dirty(&fixture.repo_path)?);
    Ok(())
}

#[test]
fn test_work_survives_a_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    git(&fixture.repo_path, &["checkout", "--quiet", "-b", "feature/x"])?;
    fixture.write("README.md", "# Test Repository\n\nhalf done\n")?;

    let summary = switch_branch(&fixture.config(), "main")?;
    assert!(summary.protected_changes);
    assert_eq!(summary.outcome, Outcome::Unchanged);
    assert_eq!(current_branch(&fixture.repo_path)?, "main");
    assert!(!is_dirty(&fixture.repo_path)?);
    assert_eq!(fixture.read("README.md")?, "# Test Repository\n");

    let summary = switch_branch(&fixture.config(), "feature/x")?;
    assert!(!summary.protected_changes);
    assert_eq!(summary.outcome, Outcome::Rewound);
    assert_eq!(head_subject(&fixture.repo_path)?, "Initial commit");
    assert!(is_dirty(&fixture.repo_path)?);
    assert!(fixture.read("README.md")?.contains("half done"));
    Ok(())
}

#[test]
fn test_new_branch_starts_from_pulled_main() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.commit_upstream("Upstream change")?;

    let summary = switch_branch(&fixture.config(), "feature/y")?;

    assert!(!summary.protected_changes);
    assert_eq!(summary.outcome, Outcome::NewBranchCreated);
    assert_eq!(current_branch(&fixture.repo_path)?, "feature/y");
    assert_eq!(head_subject(&fixture.repo_path)?, "Upstream change");
    assert!(fixture.repo_path.join("UPSTREAM.md").exists());
    Ok(())
}

#[test]
fn test_untracked_files_are_not_committed() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.write("notes.txt", "scratch\n")?;

    let summary = switch_branch(&fixture.config(), "feature/x")?;

    assert!(!summary.protected_changes);
    assert_eq!(head_subject(&fixture.repo_path)?, "Initial commit");
    assert_eq!(fixture.read("notes.txt")?, "scratch\n");
    Ok(())
}
