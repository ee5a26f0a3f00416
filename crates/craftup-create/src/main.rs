//! create-craftup - interactive scaffolding for craftup projects

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use craftup_core::generator;
use craftup_core::install;
use craftup_core::manifest::{self, ManifestClient, REPOSITORY_URL};
use craftup_core::targets;
use craftup_core::tui::Interview;
use craftup_core::{Defaults, Options};

/// CLI version - compared against the manifest version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "create-craftup")]
#[command(about = "Scaffold a new craftup project")]
#[command(version, disable_version_flag = true)]
pub struct Args {
    /// Name for the new project
    pub name: Option<String>,

    /// Use Rollup as build engine
    #[arg(short, long)]
    pub rollup: bool,

    /// Create a configuration file for your targets
    #[arg(short, long)]
    pub config: bool,

    /// Create a single target project ASAP
    #[arg(short, long)]
    pub quick: bool,

    /// The target of quick mode must be for NodeJS
    #[arg(short, long)]
    pub node: bool,

    /// The target of quick mode must be a library
    #[arg(short, long)]
    pub library: bool,

    /// The target of quick mode must use TypeScript
    #[arg(short = 't', long = "typeScript")]
    pub type_script: bool,

    /// The target of quick mode must use Flow
    #[arg(short, long)]
    pub flow: bool,

    /// Install the React plugin
    #[arg(long)]
    pub react: bool,

    /// Install the Aurelia plugin (only available for webpack)
    #[arg(long)]
    pub aurelia: bool,

    /// Install the AngularJS plugin
    #[arg(long)]
    pub angularjs: bool,

    /// Use the bundled manifest
    #[arg(long, hide = true)]
    pub local: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub version: Option<bool>,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            rollup: self.rollup,
            config: self.config,
            quick: self.quick,
            node: self.node,
            library: self.library,
            type_script: self.type_script,
            flow: self.flow,
            react: self.react,
            aurelia: self.aurelia,
            angularjs: self.angularjs,
            local: self.local,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = run(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(error) = result {
        eprintln!();
        eprintln!(
            "{}",
            "There was an error generating the project, please try again.".red()
        );
        eprintln!(
            "{}",
            format!(
                "If the issue persists, please open a ticket on {}",
                REPOSITORY_URL
            )
            .red()
        );
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), error);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let options = args.options();
    let defaults = Defaults::derive(&options, args.name);

    cliclack::intro(format!("craftup setup - v{}", CLI_VERSION))?;
    cliclack::log::remark(REPOSITORY_URL)?;

    let spinner = cliclack::spinner();
    spinner.start("Loading the manifest...");
    let client = ManifestClient::from_flags(options.local)?;
    let manifest = match client.fetch().await {
        Ok(manifest) => {
            spinner.stop("Manifest loaded");
            manifest
        }
        Err(error) => {
            spinner.stop("Failed to load the manifest");
            return Err(error);
        }
    };

    if let Some(warning) = manifest::check_compatibility(CLI_VERSION, manifest.version.as_deref()) {
        cliclack::log::warning(warning)?;
    }

    let interview = Interview::new(&manifest)?;
    let project = interview.project(&defaults)?;

    // Quick mode bypasses the target interview entirely
    let answers = if options.quick {
        vec![targets::quick_target(&project, &options)]
    } else {
        interview.targets(&project)?
    };

    cliclack::log::step("Generating files")?;
    generator::generate_files(options.config, &manifest, &project, &answers).await?;

    let spinner = cliclack::spinner();
    spinner.start("Installing project dependencies...");
    match install::install_dependencies(&project.path).await {
        Ok(()) => spinner.stop("Dependencies installed"),
        Err(error) => {
            spinner.stop("Failed to install dependencies");
            return Err(error);
        }
    }

    cliclack::outro("DONE!")?;
    Ok(())
}
