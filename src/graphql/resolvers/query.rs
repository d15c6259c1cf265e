use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{Director, Movie};
use async_graphql::{Context, FieldResult, Object, ID};

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// Get a movie by id
    async fn movie(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Movie>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.store.get_movie_by_id(&id).await {
            Ok(movie) => Ok(movie.map(|m| m.into())),
            Err(e) => Err(e.into()),
        }
    }

    /// Get a director by id
    async fn director(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Director>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.store.get_director_by_id(&id).await {
            Ok(director) => Ok(director.map(|d| d.into())),
            Err(e) => Err(e.into()),
        }
    }

    /// List all movies in insertion order
    async fn movies(&self, ctx: &Context<'_>) -> FieldResult<Vec<Movie>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.store.get_all_movies().await {
            Ok(movies) => Ok(movies.into_iter().map(|m| m.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// List all directors in insertion order
    async fn directors(&self, ctx: &Context<'_>) -> FieldResult<Vec<Director>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.store.get_all_directors().await {
            Ok(directors) => Ok(directors.into_iter().map(|d| d.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }
}
