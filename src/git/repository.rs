use crate::domain::BranchContext;
use crate::error::Result;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository for read-only inspection
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Branch currently checked out
    ///
    /// An unborn branch (no commits yet) still reports its name, since the
    /// release commit will create it. A detached HEAD reports no branch.
    pub fn current_branch(&self) -> Result<BranchContext> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head
                .shorthand()
                .map(BranchContext::new)
                .unwrap_or_else(BranchContext::detached)),
            Ok(_) => Ok(BranchContext::detached()),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .map(BranchContext::new)
                    .unwrap_or_else(BranchContext::detached))
            }
            Err(e) => Err(e.into()),
        }
    }
}
