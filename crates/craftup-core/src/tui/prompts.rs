//! The two interview phases: project questions and target questions

use crate::manifest::{Framework, Manifest};
use crate::options::Defaults;
use crate::questions;
use crate::targets::{ProjectInfo, TargetAnswer, TargetKind, TypeCheck, MAX_TARGETS};
use anyhow::{Context, Result};

/// A section heading printed before the first question it covers, and not
/// at all when every answer came from the command line
struct Heading {
    label: &'static str,
    shown: bool,
}

impl Heading {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            shown: false,
        }
    }

    fn emit(&mut self) -> Result<()> {
        if !self.shown {
            cliclack::log::step(self.label)?;
            self.shown = true;
        }
        Ok(())
    }
}

/// Asks only the questions the command line left unanswered
pub struct Interview<'a> {
    manifest: &'a Manifest,
    default_engine: String,
}

impl<'a> Interview<'a> {
    pub fn new(manifest: &'a Manifest) -> Result<Self> {
        let default_engine = manifest.default_engine()?.id.clone();
        Ok(Self {
            manifest,
            default_engine,
        })
    }

    /// Phase A: project name, engine, optional framework, and target count
    pub fn project(&self, defaults: &Defaults) -> Result<ProjectInfo> {
        let base_dir =
            std::env::current_dir().context("Failed to resolve the working directory")?;
        let mut heading = Heading::new("Project information");

        let name = match &defaults.name {
            Some(name) => {
                // A name from the command line has no prompt to re-ask
                // through, so a rejected name is fatal
                questions::validate_project_name(name, &base_dir)?;
                name.clone()
            }
            None => {
                heading.emit()?;
                let dir = base_dir.clone();
                cliclack::input("Project's name?")
                    .validate(move |input: &String| questions::validate_project_name(input, &dir))
                    .interact()?
            }
        };

        let engine = match &defaults.engine {
            Some(engine) => engine.clone(),
            None => {
                heading.emit()?;
                let mut select = cliclack::select("Build engine?");
                for engine in &self.manifest.engines {
                    select = select.item(engine.id.clone(), &engine.name, "");
                }
                select.initial_value(self.default_engine.clone()).interact()?
            }
        };

        let framework = if questions::framework_question_visible(
            defaults,
            &engine,
            &self.manifest.frameworks,
        ) {
            heading.emit()?;
            let mut select = cliclack::select("Install a framework?");
            select = select.item(String::new(), "Nop", "");
            for framework in self.manifest.frameworks_for_engine(&engine) {
                select = select.item(framework.id.clone(), &framework.name, "");
            }
            let choice: String = select.initial_value(String::new()).interact()?;
            (!choice.is_empty()).then_some(choice)
        } else {
            defaults.framework.clone().flatten()
        };

        let targets_count = match defaults.targets_count {
            Some(count) => count,
            None => {
                heading.emit()?;
                let mut select = cliclack::select("How many targets?");
                for count in 1..=MAX_TARGETS {
                    select = select.item(count, count.to_string(), "");
                }
                select.initial_value(1).interact()?
            }
        };

        let path = base_dir.join(&name);
        Ok(ProjectInfo {
            name,
            engine,
            framework,
            targets_count,
            path,
        })
    }

    /// Phase B: per-target questions, branching on the target count
    pub fn targets(&self, project: &ProjectInfo) -> Result<Vec<TargetAnswer>> {
        let framework = match &project.framework {
            Some(id) => Some(self.manifest.framework(id)?),
            None => None,
        };

        if project.targets_count > 1 {
            self.multiple_targets(project.targets_count, framework)
        } else {
            Ok(vec![self.single_target(framework)?])
        }
    }

    fn single_target(&self, framework: Option<&Framework>) -> Result<TargetAnswer> {
        cliclack::log::step("Target information")?;

        let mut answer = TargetAnswer::default();
        match framework {
            Some(fw) if fw.ssr => {
                let kind = ask_kind("Target type")?;
                answer.kind = Some(kind);
                if questions::ssr_confirm_visible(kind, framework) {
                    answer.use_framework =
                        cliclack::confirm(format!("The target will do SSR with {}?", fw.name))
                            .initial_value(false)
                            .interact()?;
                }
            }
            // A non-SSR framework forces a browser target without asking
            Some(_) => answer.kind = Some(TargetKind::Browser),
            None => {}
        }

        answer.library = ask_mode("Target mode")?;
        answer.types = ask_types("Target types validation")?;
        Ok(answer)
    }

    fn multiple_targets(
        &self,
        count: usize,
        framework: Option<&Framework>,
    ) -> Result<Vec<TargetAnswer>> {
        cliclack::log::step("Targets information")?;

        let mut answers = Vec::with_capacity(count);
        for index in 0..count {
            let number = index + 1;
            let mut answer = TargetAnswer::default();

            let name: String = cliclack::input(format!("Target name ({})", number))
                .validate(|input: &String| questions::validate_name(input))
                .interact()?;
            answer.name = Some(name);

            let kind = ask_kind(&format!("Target type ({})", number))?;
            answer.kind = Some(kind);

            if let Some(fw) = framework {
                if questions::framework_confirm_visible(kind, framework) {
                    let message = if kind == TargetKind::Node {
                        format!("The target will do SSR with {}? ({})", fw.name, number)
                    } else {
                        format!("The target will use {}? ({})", fw.name, number)
                    };
                    answer.use_framework = cliclack::confirm(message)
                        .initial_value(false)
                        .interact()?;
                }
            }

            answer.library = ask_mode(&format!("Target mode ({})", number))?;
            answer.types = ask_types(&format!("Target types validation ({})", number))?;
            answers.push(answer);
        }

        Ok(answers)
    }
}

fn ask_kind(message: &str) -> Result<TargetKind> {
    let kind = cliclack::select(message)
        .item(
            TargetKind::Browser,
            TargetKind::Browser.display_name(),
            "",
        )
        .item(TargetKind::Node, TargetKind::Node.display_name(), "")
        .initial_value(TargetKind::Browser)
        .interact()?;
    Ok(kind)
}

fn ask_mode(message: &str) -> Result<bool> {
    let library = cliclack::select(message)
        .item(false, "App", "")
        .item(true, "Library", "")
        .initial_value(false)
        .interact()?;
    Ok(library)
}

fn ask_types(message: &str) -> Result<TypeCheck> {
    let types = cliclack::select(message)
        .item(TypeCheck::None, "Nop", "")
        .item(TypeCheck::TypeScript, "TypeScript", "")
        .item(TypeCheck::Flow, "Flow", "")
        .initial_value(TypeCheck::None)
        .interact()?;
    Ok(types)
}
