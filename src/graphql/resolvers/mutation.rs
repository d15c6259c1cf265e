use crate::domain::{Director as DomainDirector, Movie as DomainMovie};
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{Director, Movie};
use async_graphql::{Context, FieldResult, Object, ID};
use tracing::info;

/// Root mutation object for GraphQL
pub struct Mutation;

#[Object]
impl Mutation {
    /// Add a movie to the catalog. The referenced director does not have
    /// to exist.
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        director_id: ID,
    ) -> FieldResult<Movie> {
        let context = ctx.data::<GraphQLContext>()?;

        let mut movie = DomainMovie {
            id: None,
            name,
            genre,
            director_id: Some(director_id.0),
        };
        context.store.create_movie(&mut movie).await?;

        info!("Added movie: {}", movie.name);
        Ok(movie.into())
    }

    /// Remove a movie by id, returning the removed record. Resolves to
    /// null when no movie has that id.
    async fn remove_movie(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Movie>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.store.delete_movie(&id).await {
            Ok(removed) => {
                if removed.is_some() {
                    info!("Removed movie with id: {}", id.as_str());
                }
                Ok(removed.map(|m| m.into()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Add a director to the catalog
    async fn add_director(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
    ) -> FieldResult<Director> {
        let context = ctx.data::<GraphQLContext>()?;

        let mut director = DomainDirector {
            id: None,
            name,
            age,
        };
        context.store.create_director(&mut director).await?;

        info!("Added director: {}", director.name);
        Ok(director.into())
    }

    /// Remove a director by id, returning the removed record. Movies
    /// referencing the director keep their directorId and dangle.
    async fn remove_director(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Director>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.store.delete_director(&id).await {
            Ok(removed) => {
                if removed.is_some() {
                    info!("Removed director with id: {}", id.as_str());
                }
                Ok(removed.map(|d| d.into()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite a director's name and age. Unknown ids produce a field
    /// error.
    async fn update_director(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        age: i32,
    ) -> FieldResult<Director> {
        let context = ctx.data::<GraphQLContext>()?;

        let updated = context.store.update_director(&id, name, age).await?;

        info!("Updated director with id: {}", id.as_str());
        Ok(updated.into())
    }

    /// Overwrite a movie's name and genre. Omitting directorId detaches
    /// the movie from its director. Unknown ids produce a field error.
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        genre: String,
        director_id: Option<ID>,
    ) -> FieldResult<Movie> {
        let context = ctx.data::<GraphQLContext>()?;

        let updated = context
            .store
            .update_movie(&id, name, genre, director_id.map(|d| d.0))
            .await?;

        info!("Updated movie with id: {}", id.as_str());
        Ok(updated.into())
    }
}
