//! Command line options and the interview defaults derived from them

/// Normalized boolean option set; unset flags resolve to `false`
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Use Rollup as build engine
    pub rollup: bool,

    /// Create a configuration file for the targets
    pub config: bool,

    /// Create a single target project without the target interview
    pub quick: bool,

    /// The quick mode target must be for NodeJS
    pub node: bool,

    /// The quick mode target must be a library
    pub library: bool,

    /// The quick mode target must use TypeScript
    pub type_script: bool,

    /// The quick mode target must use Flow
    pub flow: bool,

    /// Install the React plugin
    pub react: bool,

    /// Install the Aurelia plugin
    pub aurelia: bool,

    /// Install the AngularJS plugin
    pub angularjs: bool,

    /// Use the bundled manifest instead of fetching the remote one
    pub local: bool,
}

/// Pre-answers for the interview, derived from the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults {
    pub name: Option<String>,

    pub engine: Option<String>,

    /// `None` means undecided; `Some(None)` means explicitly no framework
    pub framework: Option<Option<String>>,

    pub targets_count: Option<usize>,
}

impl Defaults {
    /// Derive interview pre-answers from flags and the positional name
    pub fn derive(options: &Options, name: Option<String>) -> Self {
        let mut defaults = Defaults::default();

        // First framework flag wins, checked in this order
        if options.angularjs {
            defaults.framework = Some(Some("angularjs".to_string()));
        } else if options.aurelia {
            defaults.framework = Some(Some("aurelia".to_string()));
        } else if options.react {
            defaults.framework = Some(Some("react".to_string()));
        }

        if options.quick {
            let engine = if options.rollup { "rollup" } else { "webpack" };
            defaults.engine = Some(engine.to_string());
            defaults.targets_count = Some(1);
            if defaults.framework.is_none() {
                defaults.framework = Some(None);
            }
        } else if options.rollup {
            defaults.engine = Some("rollup".to_string());
        }

        defaults.name = name;
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_leaves_everything_undecided() {
        let defaults = Defaults::derive(&Options::default(), None);
        assert_eq!(defaults, Defaults::default());
    }

    #[test]
    fn test_framework_flags_set_the_default_framework() {
        let react = Options {
            react: true,
            ..Options::default()
        };
        assert_eq!(
            Defaults::derive(&react, None).framework,
            Some(Some("react".to_string()))
        );

        let aurelia = Options {
            aurelia: true,
            ..Options::default()
        };
        assert_eq!(
            Defaults::derive(&aurelia, None).framework,
            Some(Some("aurelia".to_string()))
        );
    }

    #[test]
    fn test_framework_flag_precedence() {
        // angularjs wins over aurelia and react regardless of combinations
        let all = Options {
            react: true,
            aurelia: true,
            angularjs: true,
            ..Options::default()
        };
        assert_eq!(
            Defaults::derive(&all, None).framework,
            Some(Some("angularjs".to_string()))
        );

        let two = Options {
            react: true,
            aurelia: true,
            ..Options::default()
        };
        assert_eq!(
            Defaults::derive(&two, None).framework,
            Some(Some("aurelia".to_string()))
        );
    }

    #[test]
    fn test_quick_mode_presets_the_project_answers() {
        let options = Options {
            quick: true,
            ..Options::default()
        };
        let defaults = Defaults::derive(&options, None);
        assert_eq!(defaults.engine.as_deref(), Some("webpack"));
        assert_eq!(defaults.targets_count, Some(1));
        assert_eq!(defaults.framework, Some(None));
    }

    #[test]
    fn test_quick_mode_with_rollup() {
        let options = Options {
            quick: true,
            rollup: true,
            ..Options::default()
        };
        let defaults = Defaults::derive(&options, None);
        assert_eq!(defaults.engine.as_deref(), Some("rollup"));
        assert_eq!(defaults.targets_count, Some(1));
    }

    #[test]
    fn test_quick_mode_keeps_a_framework_flag() {
        let options = Options {
            quick: true,
            react: true,
            ..Options::default()
        };
        let defaults = Defaults::derive(&options, None);
        assert_eq!(defaults.framework, Some(Some("react".to_string())));
    }

    #[test]
    fn test_rollup_without_quick_only_presets_the_engine() {
        let options = Options {
            rollup: true,
            ..Options::default()
        };
        let defaults = Defaults::derive(&options, None);
        assert_eq!(defaults.engine.as_deref(), Some("rollup"));
        assert_eq!(defaults.targets_count, None);
        assert_eq!(defaults.framework, None);
    }

    #[test]
    fn test_positional_name_is_kept() {
        let defaults = Defaults::derive(&Options::default(), Some("my-app".to_string()));
        assert_eq!(defaults.name.as_deref(), Some("my-app"));
    }
}
