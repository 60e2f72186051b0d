//! gearplan CLI - gear logistics checker for expedition plans
//!
//! Usage: gearplan <COMMAND>
//!
//! Commands:
//!   check   Evaluate a plan and list every problem
//!   render  Evaluate a plan and write the HTML report
//!   watch   Re-render the report whenever the plan changes

mod cli;
mod commands;
mod logging;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use ui::context::UiContext;
use ui::primitives::icon::Icon;
use ui::primitives::text::ColoredText;

/// Exit status for failures to read, decode or watch a plan
const EXIT_FAILURE: i32 = 2;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        if cli.json {
            let _ = ui::json::emit(ui::json::error_event(command_name(&cli.command), &format!("{err:#}")));
        } else {
            let ui = UiContext::new(false, cli.verbose, cli.color, &Default::default());
            eprintln!(
                "{} {}",
                Icon::Error.colored(ui.color, ui.unicode),
                ColoredText::error(format!("{err:#}")).render(ui.color)
            );
        }
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let plan = cli.command.plan();
    let config = commands::load_config(plan, cli.config.as_deref(), cli.stash.as_deref())?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    match &cli.command {
        Commands::Check { plan } => commands::check::cmd_check(plan, config, &ui),
        Commands::Render { plan, output } => {
            commands::render::cmd_render(plan, output.as_deref(), config, &ui)
        }
        Commands::Watch { plan, output } => commands::watch::cmd_watch(
            plan,
            output.as_deref(),
            config,
            cli.stash.clone(),
            cli.config.is_some(),
            &ui,
        ),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Check { .. } => "check",
        Commands::Render { .. } => "render",
        Commands::Watch { .. } => "watch",
    }
}
