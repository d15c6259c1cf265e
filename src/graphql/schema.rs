use crate::graphql::resolvers::{Mutation, Query};
use crate::storage::CatalogStore;
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub store: Arc<dyn CatalogStore>,
}

/// The complete GraphQL schema
pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

/// Create a new GraphQL schema with the given store
pub fn create_schema(store: Arc<dyn CatalogStore>) -> GraphQLSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(GraphQLContext { store })
        .finish()
}
