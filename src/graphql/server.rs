use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;

use super::RosterSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphql_handler(State(schema): State<RosterSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}

pub fn router(schema: RosterSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .with_state(schema)
}

/// Bind `address` and serve the schema over HTTP until interrupted.
pub async fn run_server(schema: RosterSchema, address: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    serve_on(listener, schema).await
}

pub async fn serve_on(listener: TcpListener, schema: RosterSchema) -> std::io::Result<()> {
    tracing::info!(address = %listener.local_addr()?, "GraphQL server listening");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await
}
