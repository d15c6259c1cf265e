use crate::graphql::schema::{create_schema, GraphQLSchema};
use crate::storage::CatalogStore;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    http::Method,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Extension, Router,
};
use hyper::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "cinegraph",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GraphQL handler (supports GET and POST)
async fn graphql_handler(
    Extension(schema): Extension<GraphQLSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL IDE endpoint
async fn graphiql() -> impl IntoResponse {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint("/graphql")
            .finish(),
    )
}

/// Create the HTTP server with all routes, including GraphQL
pub fn create_server(store: Arc<dyn CatalogStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let schema = create_schema(store);

    Router::new()
        .route("/health", get(health))
        .route("/graphql", post(graphql_handler).get(graphql_handler))
        .route("/graphiql", get(graphiql))
        .layer(Extension(schema))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(store: Arc<dyn CatalogStore>, port: u16) -> anyhow::Result<()> {
    let app = create_server(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    println!("🚀 HTTP server running on http://localhost:{port}");
    println!("💚 Health check: http://localhost:{port}/health");
    println!("🔎 GraphQL:      http://localhost:{port}/graphql");
    println!("🧪 GraphiQL UI:  http://localhost:{port}/graphiql");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
