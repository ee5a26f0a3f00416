//! Target answers and their normalization into generation-ready configs

use crate::manifest::Framework;
use crate::options::Options;
use std::fmt;
use std::path::PathBuf;

/// Upper bound for the target count question
pub const MAX_TARGETS: usize = 5;

/// What a target is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Browser,
    Node,
}

impl TargetKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetKind::Browser => "Browser",
            TargetKind::Node => "NodeJS",
        }
    }
}

/// Type-checking mode for a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeCheck {
    #[default]
    None,
    TypeScript,
    Flow,
}

impl TypeCheck {
    /// The configuration flag written for this mode, if any
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            TypeCheck::None => None,
            TypeCheck::TypeScript => Some("typeScript"),
            TypeCheck::Flow => Some("flow"),
        }
    }
}

/// Project-level interview answers
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub name: String,
    pub engine: String,
    pub framework: Option<String>,
    pub targets_count: usize,
    /// Project directory, resolved against the working directory
    pub path: PathBuf,
}

/// Raw per-target interview answers
#[derive(Debug, Clone, Default)]
pub struct TargetAnswer {
    /// Defaults to the project name when absent
    pub name: Option<String>,

    /// Absent when the type question was not asked; consumers treat absence
    /// as a node target
    pub kind: Option<TargetKind>,

    pub library: bool,

    pub types: TypeCheck,

    /// Whether the target confirmed using the project framework
    pub use_framework: bool,
}

/// A property written to the config file or the entry-file comment
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Str(String),
    Bool(bool),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Str(value) => write!(f, "{}", value),
            PropertyValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// Normalized, generation-ready target configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TargetConfig {
    pub name: String,

    /// Only ever `Some(Browser)`; a node target is left implicit
    pub kind: Option<TargetKind>,

    pub library: bool,

    pub types: TypeCheck,

    pub framework: Option<String>,

    /// Entry file path relative to the source root
    pub filepath: String,
}

impl TargetConfig {
    /// The non-empty configuration properties, in the order they are written
    /// to the config file. The `name` is always first.
    pub fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
        let mut properties = vec![("name", PropertyValue::Str(self.name.clone()))];

        if self.kind == Some(TargetKind::Browser) {
            properties.push(("type", PropertyValue::Str("browser".to_string())));
        }
        if self.library {
            properties.push(("library", PropertyValue::Bool(true)));
        }
        if let Some(flag) = self.types.flag() {
            properties.push((flag, PropertyValue::Bool(true)));
        }
        if let Some(framework) = &self.framework {
            properties.push(("framework", PropertyValue::Str(framework.clone())));
        }

        properties
    }

    /// The properties embedded in an entry-file metadata comment: everything
    /// except the name, which is implied by the file location
    pub fn annotations(&self) -> Vec<(&'static str, PropertyValue)> {
        self.properties()
            .into_iter()
            .filter(|(key, _)| *key != "name")
            .collect()
    }
}

/// Synthesize the single quick-mode target from flags, bypassing the target
/// interview. Quick mode has no SSR path even for SSR-capable frameworks;
/// the target type comes straight from the `node` flag.
pub fn quick_target(project: &ProjectInfo, options: &Options) -> TargetAnswer {
    let types = if options.type_script {
        TypeCheck::TypeScript
    } else if options.flow {
        TypeCheck::Flow
    } else {
        TypeCheck::None
    };

    TargetAnswer {
        name: None,
        kind: Some(if options.node {
            TargetKind::Node
        } else {
            TargetKind::Browser
        }),
        library: options.library,
        types,
        use_framework: project.framework.is_some(),
    }
}

/// Normalize raw answers into target configs
///
/// Applies the defaulting and omission rules: the project name fills in a
/// missing target name, only browser types are recorded, falsy flags are
/// dropped, the framework is attached only when the target confirmed it, and
/// the entry file gets its extension and (for multi-target projects) its
/// per-target directory.
pub fn derive_targets(
    framework: Option<&Framework>,
    project_name: &str,
    answers: &[TargetAnswer],
) -> Vec<TargetConfig> {
    let nested = answers.len() > 1;

    answers
        .iter()
        .map(|answer| {
            let name = answer
                .name
                .clone()
                .unwrap_or_else(|| project_name.to_string());

            let (framework_id, uses_jsx) = match framework {
                Some(framework) if answer.use_framework => {
                    (Some(framework.id.clone()), framework.jsx)
                }
                _ => (None, false),
            };

            let mut extension = match answer.types {
                TypeCheck::TypeScript => "ts".to_string(),
                _ => "js".to_string(),
            };
            if uses_jsx {
                extension.push('x');
            }

            let filename = format!("index.{}", extension);
            let filepath = if nested {
                format!("{}/{}", name, filename)
            } else {
                filename
            };

            TargetConfig {
                name,
                kind: (answer.kind == Some(TargetKind::Browser)).then_some(TargetKind::Browser),
                library: answer.library,
                types: answer.types,
                framework: framework_id,
                filepath,
            }
        })
        .collect()
}
