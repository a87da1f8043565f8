/// The checked-out branch a release is pushed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: Option<String>,
}

impl BranchContext {
    pub fn new(name: impl Into<String>) -> Self {
        BranchContext {
            name: Some(name.into()),
        }
    }

    /// Detached or unborn HEAD
    pub fn detached() -> Self {
        BranchContext { name: None }
    }

    pub fn is_detached(&self) -> bool {
        self.name.is_none()
    }

    /// Refspec handed to `git push`
    pub fn push_target(&self) -> &str {
        self.name.as_deref().unwrap_or("HEAD")
    }
}
