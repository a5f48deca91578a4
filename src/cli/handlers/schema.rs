use crate::graphql::build_schema;
use crate::storage::Collections;
use anyhow::Result;

pub fn handle_schema() -> Result<()> {
    // SDL only, no store is opened
    let schema = build_schema(Collections::in_memory());
    print!("{}", schema.sdl());
    Ok(())
}
