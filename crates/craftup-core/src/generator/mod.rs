//! Project file generation
//!
//! Plans the output files (package.json, optional craftup.config.js, one
//! entry file per target) in memory, then writes them to disk one at a time
//! in list order. Writes are independent: a failing write leaves earlier
//! files in place.

pub mod config_file;
pub mod package_json;

use crate::manifest::Manifest;
use crate::targets::{derive_targets, ProjectInfo, TargetAnswer, TargetConfig};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

/// Placeholder body line written to every entry file
const BODY_LINE: &str = "// Write your target code here...";

/// An output artifact, written once and then discarded
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub filepath: PathBuf,
    pub contents: String,
}

/// Build the ordered list of files to write, without touching the disk
pub fn plan_files(
    write_config: bool,
    manifest: &Manifest,
    project: &ProjectInfo,
    answers: &[TargetAnswer],
) -> Result<Vec<GeneratedFile>> {
    let engine = manifest.engine(&project.engine)?;
    let framework = project
        .framework
        .as_deref()
        .map(|id| manifest.framework(id))
        .transpose()?;
    let configs = derive_targets(framework, &project.name, answers);

    let package = package_json::build(manifest, engine, framework, project, answers, &configs)?;
    let mut files = vec![GeneratedFile {
        filepath: project.path.join("package.json"),
        contents: serde_json::to_string_pretty(&package)?,
    }];

    if write_config {
        files.push(GeneratedFile {
            filepath: project.path.join("craftup.config.js"),
            contents: config_file::render(&configs),
        });
    }

    let source_root = project.path.join("src");
    for config in &configs {
        files.push(GeneratedFile {
            filepath: source_root.join(&config.filepath),
            contents: entry_file_contents(config, !write_config),
        });
    }

    Ok(files)
}

/// Plan and persist the project files, creating parent directories as needed
pub async fn generate_files(
    write_config: bool,
    manifest: &Manifest,
    project: &ProjectInfo,
    answers: &[TargetAnswer],
) -> Result<()> {
    let files = plan_files(write_config, manifest, project, answers)?;
    for file in &files {
        write_file(file).await?;
    }
    Ok(())
}

async fn write_file(file: &GeneratedFile) -> Result<()> {
    if let Some(parent) = file.filepath.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&file.filepath, &file.contents)
        .await
        .with_context(|| format!("Failed to write file: {}", file.filepath.display()))
}

/// Entry file contents: when the configuration is not externalized, the
/// target's non-empty properties are embedded as a metadata comment before
/// the placeholder body
fn entry_file_contents(config: &TargetConfig, annotate: bool) -> String {
    let mut lines: Vec<String> = Vec::new();

    if annotate {
        let annotations = config.annotations();
        if !annotations.is_empty() {
            lines.push("/**".to_string());
            lines.push(" * @craftup".to_string());
            for (key, value) in annotations {
                lines.push(format!(" * {}: {}", key, value));
            }
            lines.push(" */".to_string());
            lines.push(String::new());
        }
    }

    lines.push(BODY_LINE.to_string());
    lines.push(String::new());
    lines.join("\n")
}
