//! Validation and visibility rules for the interview
//!
//! Everything here is a pure function of its inputs so the rules can be
//! tested without a terminal; the `tui` module wires them into cliclack.

use crate::manifest::Framework;
use crate::options::Defaults;
use crate::targets::TargetKind;
use std::path::Path;

/// A rejected project or target name
///
/// Rendered through `Display` as the inline prompt validation message; when
/// the name came from the command line instead of a prompt it becomes a
/// fatal error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("The name is required")]
    Empty,

    #[error(
        "The name '{0}' is invalid: it can only contain lower case letters, numbers and dashes (-)"
    )]
    Invalid(String),

    #[error("There's already a directory named '{0}'")]
    Exists(String),
}

/// Validate a target name: non-empty, lower case letters, numbers and dashes
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    let valid = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        return Err(NameError::Invalid(name.to_string()));
    }

    Ok(())
}

/// Validate a project name: the target name rules plus no existing directory
/// with that name under `base_dir`
pub fn validate_project_name(name: &str, base_dir: &Path) -> Result<(), NameError> {
    validate_name(name)?;

    if base_dir.join(name).exists() {
        return Err(NameError::Exists(name.to_string()));
    }

    Ok(())
}

/// Whether the framework question should be shown
///
/// The question is suppressed only when the command line already decided:
/// either an explicit "no framework" or a framework compatible with the
/// resolved engine. An incompatible default framework re-opens the question.
pub fn framework_question_visible(
    defaults: &Defaults,
    engine: &str,
    frameworks: &[Framework],
) -> bool {
    match &defaults.framework {
        None => true,
        Some(None) => false,
        Some(Some(id)) => !frameworks
            .iter()
            .any(|framework| &framework.id == id && framework.supports_engine(engine)),
    }
}

/// Whether the single-target SSR confirmation should be shown
pub fn ssr_confirm_visible(kind: TargetKind, framework: Option<&Framework>) -> bool {
    kind == TargetKind::Node && framework.is_some_and(|framework| framework.ssr)
}

/// Whether the multi-target framework-usage confirmation should be shown:
/// the project has a framework and the target can actually use it (browser
/// targets always can, node targets only when the framework supports SSR)
pub fn framework_confirm_visible(kind: TargetKind, framework: Option<&Framework>) -> bool {
    framework.is_some_and(|framework| kind == TargetKind::Browser || framework.ssr)
}
