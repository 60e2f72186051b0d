use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// gearplan - check who carries what through an expedition plan
#[derive(Parser, Debug)]
#[command(name = "gearplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output as NDJSON events
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Name of the unlimited, always-reachable stash
    #[arg(long, global = true, value_name = "NAME")]
    pub stash: Option<String>,

    /// Config file to use instead of gearplan.toml next to the plan
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a plan and list every problem (non-zero exit if any)
    Check {
        /// Plan document (.json, .yaml or .yml)
        plan: PathBuf,
    },

    /// Evaluate a plan and write the HTML report
    Render {
        /// Plan document (.json, .yaml or .yml)
        plan: PathBuf,

        /// Report path (default: <PLAN>.output.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Re-render the report whenever the plan changes (Ctrl+C to stop)
    Watch {
        /// Plan document (.json, .yaml or .yml)
        plan: PathBuf,

        /// Report path (default: <PLAN>.output.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    pub fn plan(&self) -> &PathBuf {
        match self {
            Commands::Check { plan } | Commands::Render { plan, .. } | Commands::Watch { plan, .. } => {
                plan
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["gearplan"]).is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["gearplan", "check", "alps.yaml"]).unwrap();
        match cli.command {
            Commands::Check { plan } => assert_eq!(plan, PathBuf::from("alps.yaml")),
            other => panic!("Expected Check command, got {:?}", other),
        }
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_check_requires_plan() {
        assert!(Cli::try_parse_from(["gearplan", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_render_with_output() {
        let cli =
            Cli::try_parse_from(["gearplan", "render", "plan.json", "-o", "out.html"]).unwrap();
        match cli.command {
            Commands::Render { plan, output } => {
                assert_eq!(plan, PathBuf::from("plan.json"));
                assert_eq!(output, Some(PathBuf::from("out.html")));
            }
            other => panic!("Expected Render command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_watch() {
        let cli = Cli::try_parse_from(["gearplan", "watch", "plan.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Watch { output: None, .. }));
        assert_eq!(cli.command.plan(), &PathBuf::from("plan.json"));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gearplan",
            "check",
            "plan.json",
            "--json",
            "-vv",
            "--color",
            "never",
            "--stash",
            "Depot",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.stash.as_deref(), Some("Depot"));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_cli_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["gearplan", "check", "p.json", "--color", "pink"]).is_err());
    }
}
