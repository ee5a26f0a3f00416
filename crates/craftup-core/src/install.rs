//! Dependency installation through the detected package manager

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// The package manager used to install the generated project's dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    /// Probe for yarn, falling back to npm
    pub fn detect() -> Self {
        let available = std::process::Command::new("yarn")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success());

        if available {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// The install invocation: yarn takes no arguments, npm needs `install`
    fn command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            PackageManager::Yarn => ("yarn", &[]),
            PackageManager::Npm => ("npm", &["install"]),
        }
    }
}

/// Install dependencies inside the generated project directory with output
/// suppressed, waiting for the child to exit. A non-zero exit status is an
/// error.
pub async fn install_dependencies(project_dir: &Path) -> Result<()> {
    install_with(PackageManager::detect(), project_dir).await
}

async fn install_with(manager: PackageManager, project_dir: &Path) -> Result<()> {
    let (program, args) = manager.command();

    let status = Command::new(program)
        .args(args)
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .with_context(|| format!("Failed to run {}", manager.display_name()))?;

    if !status.success() {
        anyhow::bail!(
            "{} exited with status code: {}",
            manager.display_name(),
            status.code().unwrap_or(-1)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_invocations() {
        assert_eq!(PackageManager::Yarn.command(), ("yarn", &[] as &[&str]));
        assert_eq!(
            PackageManager::Npm.command(),
            ("npm", &["install"] as &[&str])
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PackageManager::Yarn.display_name(), "yarn");
        assert_eq!(PackageManager::Npm.display_name(), "npm");
    }
}
