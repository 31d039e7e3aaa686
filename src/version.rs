use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use semver::Version;

/// Matches release tags: exactly one `v` prefix and three dot-separated
/// numeric components, with no pre-release or build suffix.
fn release_tag_regex() -> Result<Regex> {
    Ok(Regex::new(r"^v\d+\.\d+\.\d+$")?)
}

/// Filters a tag list down to the release-shaped tags, preserving order.
pub fn release_tags(tags: &[String]) -> Result<Vec<&str>> {
    let regex = release_tag_regex()?;
    Ok(tags
        .iter()
        .map(String::as_str)
        .filter(|tag| regex.is_match(tag))
        .collect())
}

/// Parses the version from a release tag, stripping the `v` prefix.
pub fn parse_tag(tag: &str) -> Result<Version> {
    Version::parse(tag.trim_start_matches('v'))
        .with_context(|| format!("Failed to parse version from tag '{tag}'"))
}

/// Highest released version, or 0.0.0 if no release tag exists yet.
pub fn latest_version(tags: &[String]) -> Result<Version> {
    let release = release_tags(tags)?;
    debug!("{} of {} tags are release tags", release.len(), tags.len());

    let mut latest = Version::new(0, 0, 0);
    for tag in release {
        let version = parse_tag(tag)?;
        if version > latest {
            latest = version;
        }
    }
    Ok(latest)
}

/// Gets the next version: the latest released version with its patch
/// component incremented. Major and minor are left unchanged.
pub fn next_version(tags: &[String]) -> Result<Version> {
    let current = latest_version(tags)?;
    let mut next = current.clone();
    next.patch += 1;
    debug!("Incrementing version from {} -> {}", current, next);
    Ok(next)
}

/// Formats a version as a tag name, e.g. `v1.2.3`.
pub fn tag_name(version: &Version) -> String {
    format!("v{version}")
}
