use anyhow::Result;

use super::CommandContext;
use crate::graphql::{GRAPHQL_PATH, run_server};

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }
    let address = ctx.config.bind_address();

    println!("Starting GraphQL server on http://{}{}", address, GRAPHQL_PATH);
    println!("GraphiQL: http://{}{}", address, GRAPHQL_PATH);

    tokio::runtime::Runtime::new()?.block_on(async {
        let schema = ctx.schema().await?;
        run_server(schema, &address).await?;
        anyhow::Ok(())
    })
}
