//! Craftup Core - Library for scaffolding craftup projects
//!
//! This library provides the building blocks used by the `create-craftup`
//! binary: the manifest schema and client, flag-derived interview defaults,
//! the question visibility rules, target configuration derivation, project
//! file generation, and dependency installation.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for defaults derivation,
//!   question rules, and target config normalization
//! - **Layer 2: I/O Services** - Manifest fetching, file generation, and the
//!   package-manager install step
//! - **Layer 3: CLI/TUI Interface** - cliclack-based interview (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interview module

pub mod generator;
pub mod install;
pub mod manifest;
pub mod options;
pub mod questions;
pub mod targets;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use manifest::{Engine, Framework, Manifest, ManifestClient, ManifestSource};
pub use options::{Defaults, Options};
pub use targets::{ProjectInfo, TargetAnswer, TargetConfig, TargetKind, TypeCheck};

#[cfg(feature = "tui")]
pub use tui::Interview;
