//! Manifest types and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The manifest bundled with the CLI, used with `--local` and as the schema
/// reference for the remote copy.
const BUNDLED_MANIFEST: &str = include_str!("../../manifest.json");

/// An installable npm package reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRef {
    pub name: String,
    pub version: String,
}

impl PackageRef {
    /// Render the package version as a caret semver requirement
    pub fn version_requirement(&self) -> String {
        format!("^{}", self.version)
    }
}

/// Dev packages installed on every generated project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasePackages {
    pub packages: Vec<PackageRef>,
}

/// A build-tool choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engine {
    pub id: String,

    /// Display name shown in the engine prompt
    pub name: String,

    pub package: PackageRef,

    /// Whether this engine is preselected in the interview. Exactly one
    /// engine per manifest must carry this flag.
    #[serde(default)]
    pub default: bool,
}

/// Dependency maps for one render mode of a framework
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencySet {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

/// Client-side vs server-side rendering dependency profiles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderTemplates {
    #[serde(default)]
    pub csr: DependencySet,

    #[serde(default)]
    pub ssr: DependencySet,
}

/// A front-end framework choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Framework {
    pub id: String,

    /// Display name shown in the framework prompt
    pub name: String,

    /// Whether the framework can render on a node target
    #[serde(default)]
    pub ssr: bool,

    /// Whether targets using this framework get an `x` extension suffix
    #[serde(default)]
    pub jsx: bool,

    /// Ids of the engines this framework can be used with
    pub engines: Vec<String>,

    /// Integration package per compatible engine id
    pub packages: BTreeMap<String, PackageRef>,

    /// Dependency templates per render mode
    #[serde(default)]
    pub template: RenderTemplates,
}

impl Framework {
    /// Whether this framework can be used with the given engine
    pub fn supports_engine(&self, engine_id: &str) -> bool {
        self.engines.iter().any(|id| id == engine_id)
    }
}

/// npm script templates; keys and values may contain a `${name}` placeholder
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scripts {
    #[serde(default, rename = "singleTarget")]
    pub single_target: BTreeMap<String, String>,

    #[serde(default, rename = "multiTarget")]
    pub multi_target: BTreeMap<String, String>,
}

/// Catalog of install-time choices, loaded once per run and read-only after
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Manifest revision for CLI compatibility warnings
    #[serde(default)]
    pub version: Option<String>,

    pub base: BasePackages,
    pub engines: Vec<Engine>,
    pub frameworks: Vec<Framework>,
    pub scripts: Scripts,
}

impl Manifest {
    /// Parse a manifest from JSON and check its invariants
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_str(content).context("Failed to parse manifest")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// The manifest compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_MANIFEST).context("The bundled manifest is invalid")
    }

    /// Check the exactly-one-default-engine invariant
    pub fn validate(&self) -> Result<()> {
        let defaults = self.engines.iter().filter(|engine| engine.default).count();
        if defaults != 1 {
            anyhow::bail!(
                "The manifest must declare exactly one default engine, found {}",
                defaults
            );
        }
        Ok(())
    }

    /// The engine preselected in the interview
    pub fn default_engine(&self) -> Result<&Engine> {
        self.engines
            .iter()
            .find(|engine| engine.default)
            .ok_or_else(|| anyhow::anyhow!("The manifest has no default engine"))
    }

    /// Look up an engine by id
    pub fn engine(&self, id: &str) -> Result<&Engine> {
        self.engines
            .iter()
            .find(|engine| engine.id == id)
            .ok_or_else(|| anyhow::anyhow!("Unknown engine '{}'", id))
    }

    /// Look up a framework by id
    pub fn framework(&self, id: &str) -> Result<&Framework> {
        self.frameworks
            .iter()
            .find(|framework| framework.id == id)
            .ok_or_else(|| anyhow::anyhow!("Unknown framework '{}'", id))
    }

    /// Frameworks that can be offered for the given engine
    pub fn frameworks_for_engine(&self, engine_id: &str) -> Vec<&Framework> {
        self.frameworks
            .iter()
            .filter(|framework| framework.supports_engine(engine_id))
            .collect()
    }
}
