//! Domain logic - pure version rules independent of manifest and git plumbing

pub mod branch;
pub mod bump;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use branch::BranchContext;
pub use bump::{BumpRequest, BumpType};
pub use prerelease::{PreRelease, PreReleaseType};
pub use tag::TagPattern;
pub use version::Version;
