use crate::config::StoreBackend;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster")]
#[command(
    author,
    version,
    about = "A GraphQL API for students, teachers and courses"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .roster.yml by default)
    #[arg(long, global = true, env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Document store backend (overrides config)
    #[arg(long, global = true, value_enum, env = "ROSTER_STORE")]
    pub store: Option<StoreArg>,

    /// MongoDB connection string (overrides config)
    #[arg(long, global = true, env = "ROSTER_MONGODB_URI")]
    pub mongodb_uri: Option<String>,

    /// MongoDB database name (overrides config)
    #[arg(long, global = true, env = "ROSTER_DATABASE")]
    pub database: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .roster.yml in the current directory
    Init,

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StoreArg {
    Memory,
    Mongodb,
}

impl From<StoreArg> for StoreBackend {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::Memory => StoreBackend::Memory,
            StoreArg::Mongodb => StoreBackend::Mongodb,
        }
    }
}
