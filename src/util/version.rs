use semver::Version;
use thiserror::Error;

pub const APP_NAME: &str = "Pricing Desk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

#[derive(Error, Debug, PartialEq)]
#[error("invalid version format: {0}")]
pub struct InvalidVersion(String);

/// Parses `1.2.3`, `v1.2.3` or `V1.2.3`.
pub fn parse_version_str(input: &str) -> Result<Version, InvalidVersion> {
    let trimmed = input.trim().trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|err| InvalidVersion(err.to_string()))
}

/// The build's git tag when it is a release version, else the crate version.
pub fn current_version() -> Result<Version, InvalidVersion> {
    GIT_TAG
        .and_then(|tag| parse_version_str(tag).ok())
        .map(Ok)
        .unwrap_or_else(|| parse_version_str(APP_VERSION))
}

pub fn version_label() -> String {
    match current_version() {
        Ok(version) => format!("v{version}"),
        Err(_) => GIT_TAG.unwrap_or(APP_VERSION).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_may_carry_a_v_prefix() {
        assert_eq!(parse_version_str("v1.4.0").unwrap(), Version::new(1, 4, 0));
        assert_eq!(parse_version_str(" V2.0.1 ").unwrap(), Version::new(2, 0, 1));
        assert!(parse_version_str("nightly").is_err());
    }

    #[test]
    fn label_is_prefixed() {
        assert!(version_label().starts_with('v'));
    }
}
