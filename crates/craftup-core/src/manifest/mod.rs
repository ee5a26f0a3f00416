//! Manifest schema, loading, and compatibility checking
//!
//! This module provides:
//! - Manifest types (engines, frameworks, base packages, script templates)
//! - Manifest fetching from the remote raw URL or the bundled copy
//! - Version compatibility checking between the CLI and the manifest

pub mod client;
pub mod schema;
pub mod version;

pub use client::{ManifestClient, ManifestSource, MANIFEST_URL_ENV, REPOSITORY_URL};
pub use schema::{BasePackages, DependencySet, Engine, Framework, Manifest, PackageRef, Scripts};
pub use version::check_compatibility;
