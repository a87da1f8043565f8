use crate::domain::{BumpRequest, PreReleaseType, Version};
use crate::error::{Result, VersionBumpError};
use tracing::debug;

/// Computes the next version string from the current one.
///
/// `bump_type` is either one of the keywords `patch`, `minor`, `major`,
/// `prepatch`, `preminor`, `premajor`, `prerelease`, or a literal override
/// (`2.3.4`, `v2.0`, `dev-main`) which is returned verbatim without looking
/// at `current`.
///
/// # Arguments
/// * `current` - Version currently stored in the manifest
/// * `bump_type` - Keyword or literal override
///
/// # Returns
/// * `Ok(String)` - The new version
/// * `Err(MalformedVersion)` - If `current` is not `MAJOR.MINOR.PATCH[-LABEL[.NUMBER]]`
/// * `Err(UnknownBumpType)` - If `bump_type` is neither a keyword nor a literal
///
/// # Example
/// ```
/// use version_bump::version::bump;
///
/// assert_eq!(bump("1.2.3", "minor").unwrap(), "1.3.0");
/// assert_eq!(bump("1.0.0", "prepatch").unwrap(), "1.0.1-beta.0");
/// assert_eq!(bump("1.0.1-beta.0", "prerelease").unwrap(), "1.0.1-beta.1");
/// assert_eq!(bump("1.0.0", "2.3.4").unwrap(), "2.3.4");
/// ```
pub fn bump(current: &str, bump_type: &str) -> Result<String> {
    bump_with_label(current, bump_type, None)
}

/// Like [`bump`], with an explicit pre-release label for the `pre*` keywords.
///
/// Without a label the current label is kept, or `beta` if there is none.
pub fn bump_with_label(
    current: &str,
    bump_type: &str,
    label: Option<PreReleaseType>,
) -> Result<String> {
    let keyword = match bump_type.parse::<BumpRequest>()? {
        BumpRequest::Literal(version) => {
            debug!(%version, "using literal version override");
            return Ok(version);
        }
        BumpRequest::Keyword(keyword) => keyword,
    };

    let version = Version::parse(current)?;
    let next = version
        .bump(keyword, label)
        .ok_or_else(|| VersionBumpError::malformed(current))?;

    debug!(from = %version, to = %next, bump = %keyword, "computed next version");
    Ok(next.to_string())
}
