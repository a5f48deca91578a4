use anyhow::{Context, Result};
use clap::Parser;

use roster::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use roster::cli::{Cli, Commands};
use roster::config::RosterConfig;
use roster::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init => handle_init(),
        Commands::Schema => handle_schema(),
        Commands::Query {
            ref query,
            ref variables,
        } => {
            let ctx = CommandContext::new(load_config(&cli)?);
            handle_query(ctx, query.clone(), variables.clone())
        }
        Commands::Mutate {
            ref mutation,
            ref variables,
        } => {
            let ctx = CommandContext::new(load_config(&cli)?);
            handle_mutate(ctx, mutation.clone(), variables.clone())
        }
        Commands::Serve { ref host, port } => {
            let ctx = CommandContext::new(load_config(&cli)?);
            handle_serve(ctx, host.clone(), port)
        }
    }
}

fn load_config(cli: &Cli) -> Result<RosterConfig> {
    let mut config = match cli.config {
        Some(ref path) => RosterConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir()?;
            RosterConfig::load(&cwd).context("Failed to load roster configuration")?
        }
    };

    if let Some(store) = cli.store {
        config.store.backend = store.into();
    }
    if let Some(ref uri) = cli.mongodb_uri {
        config.store.uri = uri.clone();
    }
    if let Some(ref database) = cli.database {
        config.store.database = database.clone();
    }

    Ok(config)
}
