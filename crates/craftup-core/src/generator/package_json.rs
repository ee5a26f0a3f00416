//! package.json payload for the generated project

use crate::manifest::{Engine, Framework, Manifest, PackageRef};
use crate::targets::{ProjectInfo, TargetAnswer, TargetConfig, TargetKind};
use anyhow::Result;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Build the package.json payload
///
/// Dev dependencies are the manifest base packages, the selected engine's
/// package, and (when a framework is used) the framework's integration
/// package for that engine, layered over the active render-mode template.
pub fn build(
    manifest: &Manifest,
    engine: &Engine,
    framework: Option<&Framework>,
    project: &ProjectInfo,
    answers: &[TargetAnswer],
    configs: &[TargetConfig],
) -> Result<Value> {
    let mut dependencies: BTreeMap<String, String> = BTreeMap::new();
    let mut dev_dependencies: BTreeMap<String, String> = BTreeMap::new();

    let mut dev_packages: Vec<&PackageRef> = manifest.base.packages.iter().collect();
    dev_packages.push(&engine.package);

    if let Some(framework) = framework {
        let integration = framework.packages.get(&project.engine).ok_or_else(|| {
            anyhow::anyhow!(
                "The framework '{}' has no package for the engine '{}'",
                framework.id,
                project.engine
            )
        })?;
        dev_packages.push(integration);

        let template = if render_mode_is_ssr(answers) {
            &framework.template.ssr
        } else {
            &framework.template.csr
        };
        dependencies = template.dependencies.clone();
        dev_dependencies = template.dev_dependencies.clone();
    }

    for package in dev_packages {
        dev_dependencies.insert(package.name.clone(), package.version_requirement());
    }

    let scripts = if configs.len() > 1 {
        let names: Vec<&str> = configs.iter().map(|config| config.name.as_str()).collect();
        expand_scripts(&manifest.scripts.multi_target, &names)
    } else {
        manifest.scripts.single_target.clone()
    };

    Ok(json!({
        "name": project.name,
        "dependencies": dependencies,
        "devDependencies": dev_dependencies,
        "scripts": scripts,
    }))
}

/// The project renders server side when at least one target is a node
/// target that confirmed the framework
fn render_mode_is_ssr(answers: &[TargetAnswer]) -> bool {
    answers
        .iter()
        .any(|answer| answer.kind == Some(TargetKind::Node) && answer.use_framework)
}

/// Expand every multi-target script template once per target, substituting
/// the `${name}` placeholder in both keys and values
fn expand_scripts(
    templates: &BTreeMap<String, String>,
    target_names: &[&str],
) -> BTreeMap<String, String> {
    let mut scripts = BTreeMap::new();
    for name in target_names {
        for (key, value) in templates {
            scripts.insert(key.replace("${name}", name), value.replace("${name}", name));
        }
    }
    scripts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::{derive_targets, TypeCheck};
    use std::path::PathBuf;

    fn project(engine: &str, framework: Option<&str>, targets_count: usize) -> ProjectInfo {
        ProjectInfo {
            name: "my-app".to_string(),
            engine: engine.to_string(),
            framework: framework.map(String::from),
            targets_count,
            path: PathBuf::from("/tmp/my-app"),
        }
    }

    fn build_for(
        engine: &str,
        framework: Option<&str>,
        answers: &[TargetAnswer],
    ) -> Value {
        let manifest = Manifest::bundled().unwrap();
        let project = project(engine, framework, answers.len());
        let engine = manifest.engine(&project.engine).unwrap();
        let framework = framework.map(|id| manifest.framework(id).unwrap());
        let configs = derive_targets(framework, &project.name, answers);
        build(&manifest, engine, framework, &project, answers, &configs).unwrap()
    }

    #[test]
    fn test_multi_target_script_expansion() {
        let mut templates = BTreeMap::new();
        templates.insert("build:${name}".to_string(), "run build ${name}".to_string());
        templates.insert("start:${name}".to_string(), "run start ${name}".to_string());

        let scripts = expand_scripts(&templates, &["a", "b"]);

        assert_eq!(scripts.len(), 4);
        assert_eq!(scripts["build:a"], "run build a");
        assert_eq!(scripts["build:b"], "run build b");
        assert_eq!(scripts["start:a"], "run start a");
        assert_eq!(scripts["start:b"], "run start b");
        assert!(scripts
            .iter()
            .all(|(key, value)| !key.contains("${name}") && !value.contains("${name}")));
    }

    #[test]
    fn test_single_target_scripts_are_used_verbatim() {
        let manifest = Manifest::bundled().unwrap();
        let package = build_for("webpack", None, &[TargetAnswer::default()]);
        let scripts = package["scripts"].as_object().unwrap();

        assert_eq!(scripts.len(), manifest.scripts.single_target.len());
        for (key, value) in &manifest.scripts.single_target {
            assert_eq!(scripts[key], json!(value));
        }
    }

    #[test]
    fn test_dev_dependencies_without_a_framework() {
        let package = build_for("webpack", None, &[TargetAnswer::default()]);
        let dev = package["devDependencies"].as_object().unwrap();

        assert_eq!(dev["craftup"], json!("^1.0.0"));
        assert_eq!(dev["craftup-plugin-webpack"], json!("^1.0.0"));
        assert_eq!(dev.len(), 2);
        assert!(package["dependencies"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_framework_adds_its_engine_package_and_csr_deps() {
        let answers = [TargetAnswer {
            kind: Some(TargetKind::Browser),
            use_framework: true,
            ..TargetAnswer::default()
        }];
        let package = build_for("rollup", Some("react"), &answers);
        let dev = package["devDependencies"].as_object().unwrap();
        let deps = package["dependencies"].as_object().unwrap();

        assert_eq!(dev["craftup-plugin-rollup"], json!("^1.0.0"));
        assert_eq!(dev["craftup-plugin-rollup-react"], json!("^1.0.0"));
        assert!(deps.contains_key("react"));
        assert!(deps.contains_key("react-dom"));
        // CSR profile carries no ssr-only dev packages
        assert!(!dev.contains_key("@babel/polyfill"));
    }

    #[test]
    fn test_node_framework_target_switches_to_ssr_deps() {
        let answers = [TargetAnswer {
            kind: Some(TargetKind::Node),
            use_framework: true,
            ..TargetAnswer::default()
        }];
        let package = build_for("webpack", Some("react"), &answers);
        let dev = package["devDependencies"].as_object().unwrap();

        assert!(dev.contains_key("@babel/polyfill"));
    }

    #[test]
    fn test_node_target_without_framework_stays_csr() {
        let answers = [
            TargetAnswer {
                name: Some("app".to_string()),
                kind: Some(TargetKind::Browser),
                use_framework: true,
                ..TargetAnswer::default()
            },
            TargetAnswer {
                name: Some("server".to_string()),
                kind: Some(TargetKind::Node),
                types: TypeCheck::None,
                ..TargetAnswer::default()
            },
        ];
        assert!(!render_mode_is_ssr(&answers));

        let package = build_for("webpack", Some("react"), &answers);
        let dev = package["devDependencies"].as_object().unwrap();
        assert!(!dev.contains_key("@babel/polyfill"));
    }

    #[test]
    fn test_package_name_is_the_project_name() {
        let package = build_for("webpack", None, &[TargetAnswer::default()]);
        assert_eq!(package["name"], json!("my-app"));
    }
}
