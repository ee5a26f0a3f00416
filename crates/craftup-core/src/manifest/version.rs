//! Version comparison between the CLI and the fetched manifest

use semver::Version;

/// Compare the CLI version against the manifest version
/// Returns a warning message if the CLI is older than the manifest expects
pub fn check_compatibility(cli_version: &str, manifest_version: Option<&str>) -> Option<String> {
    let manifest_version = manifest_version?;

    let cli_ver = match Version::parse(cli_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let manifest_ver = match Version::parse(manifest_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    if cli_ver < manifest_ver {
        Some(format!(
            "This manifest was published for CLI version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: npm install -g create-craftup",
            manifest_version, cli_version
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_older_than_manifest() {
        let warning = check_compatibility("0.1.0", Some("0.2.0"));
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("0.2.0"));
    }

    #[test]
    fn test_cli_same_as_manifest() {
        assert!(check_compatibility("0.1.0", Some("0.1.0")).is_none());
    }

    #[test]
    fn test_cli_newer_than_manifest() {
        assert!(check_compatibility("0.2.0", Some("0.1.0")).is_none());
    }

    #[test]
    fn test_unversioned_manifest() {
        assert!(check_compatibility("0.1.0", None).is_none());
    }

    #[test]
    fn test_invalid_versions() {
        // Should return None (no warning) for invalid versions
        assert!(check_compatibility("invalid", Some("0.1.0")).is_none());
        assert!(check_compatibility("0.1.0", Some("latest")).is_none());
    }
}
