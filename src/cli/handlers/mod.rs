mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::RosterConfig;
use crate::graphql::{RosterSchema, build_schema};
use crate::storage::Collections;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: RosterConfig,
}

impl CommandContext {
    pub fn new(config: RosterConfig) -> Self {
        Self { config }
    }

    /// Open the configured store and build a schema over it.
    pub async fn schema(&self) -> anyhow::Result<RosterSchema> {
        let collections = Collections::open(&self.config.store).await?;
        Ok(build_schema(collections))
    }
}

fn parse_variables(variables: Option<String>) -> anyhow::Result<async_graphql::Variables> {
    Ok(match variables {
        Some(v) => serde_json::from_str(&v)?,
        None => async_graphql::Variables::default(),
    })
}
