//! Rendering of the optional craftup.config.js file
//!
//! The file maps each target name to its derived configuration (minus the
//! entry file path) as a CommonJS export, formatted the way a person would
//! write it: two-space indent, single-quoted strings, bare identifier keys,
//! trailing commas.

use crate::targets::{PropertyValue, TargetConfig};

const INDENT: &str = "  ";

/// Render the full configuration file contents
pub fn render(configs: &[TargetConfig]) -> String {
    let mut lines = vec![
        "module.exports = {".to_string(),
        format!("{}targets: {{", INDENT),
    ];

    for config in configs {
        lines.push(format!("{}{}: {{", INDENT.repeat(2), key(&config.name)));
        for (name, value) in config.properties() {
            lines.push(format!(
                "{}{}: {},",
                INDENT.repeat(3),
                key(name),
                literal(&value)
            ));
        }
        lines.push(format!("{}}},", INDENT.repeat(2)));
    }

    lines.push(format!("{}}},", INDENT));
    lines.push("};".to_string());
    lines.push(String::new());
    lines.join("\n")
}

/// Quote a key unless it is a valid bare identifier
fn key(name: &str) -> String {
    let bare = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if bare {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "\\'"))
    }
}

/// Render a property value as a JS literal
fn literal(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Str(text) => format!("'{}'", text.replace('\'', "\\'")),
        PropertyValue::Bool(flag) => flag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::{TargetKind, TypeCheck};

    fn config(name: &str) -> TargetConfig {
        TargetConfig {
            name: name.to_string(),
            kind: None,
            library: false,
            types: TypeCheck::None,
            framework: None,
            filepath: "index.js".to_string(),
        }
    }

    #[test]
    fn test_minimal_target() {
        let rendered = render(&[config("app")]);
        assert_eq!(
            rendered,
            "module.exports = {\n\
             \x20 targets: {\n\
             \x20   app: {\n\
             \x20     name: 'app',\n\
             \x20   },\n\
             \x20 },\n\
             };\n"
        );
    }

    #[test]
    fn test_full_target_properties() {
        let full = TargetConfig {
            kind: Some(TargetKind::Browser),
            library: true,
            types: TypeCheck::TypeScript,
            framework: Some("react".to_string()),
            ..config("app")
        };
        let rendered = render(&[full]);

        assert!(rendered.contains("type: 'browser',"));
        assert!(rendered.contains("library: true,"));
        assert!(rendered.contains("typeScript: true,"));
        assert!(rendered.contains("framework: 'react',"));
        // The entry file path never leaks into the config file
        assert!(!rendered.contains("filepath"));
        assert!(!rendered.contains("index.js"));
    }

    #[test]
    fn test_dashed_names_are_quoted_keys() {
        let rendered = render(&[config("my-target")]);
        assert!(rendered.contains("'my-target': {"));
        assert!(rendered.contains("name: 'my-target',"));
    }

    #[test]
    fn test_two_targets_keyed_by_name() {
        let rendered = render(&[config("app"), config("admin")]);
        assert!(rendered.contains("app: {"));
        assert!(rendered.contains("admin: {"));
    }
}
