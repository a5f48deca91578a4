use anyhow::Result;

use super::{CommandContext, parse_variables};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let vars = parse_variables(variables)?;

    let response = tokio::runtime::Runtime::new()?.block_on(async {
        let schema = ctx.schema().await?;
        let request = async_graphql::Request::new(query).variables(vars);
        anyhow::Ok(schema.execute(request).await)
    })?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
