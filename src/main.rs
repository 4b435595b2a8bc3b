use clap::Parser;
use locator_recorder::cli::commands::{cmd_derive, cmd_replay, cmd_report};
use locator_recorder::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Derive {
            fixture,
            id,
            index,
            format,
        } => {
            cmd_derive(&fixture, id.as_deref(), index, &format, cli.verbose)?;
        }
        Commands::Replay {
            fixture,
            script,
            format,
            output,
            trace,
            store,
        } => {
            // Resolve settings: CLI > config > defaults
            let format = format.unwrap_or(config.replay.format);
            let output = output.or(config.replay.output);
            let trace = trace.or(config.replay.trace);
            let store = store.or(config.replay.store);

            cmd_replay(
                &fixture,
                &script,
                &format,
                output.as_deref(),
                trace.as_deref(),
                store.as_deref(),
                cli.verbose,
            )?;
        }
        Commands::Report {
            session,
            format,
            output,
        } => {
            let format = format.unwrap_or(config.report.format);
            let output = output.or(config.report.output);

            cmd_report(&session, &format, output.as_deref())?;
        }
    }

    Ok(())
}
