use crate::domain::Movie as DomainMovie;
use crate::graphql::schema::GraphQLContext;
use async_graphql::{Context, FieldResult, Object, ID};

/// GraphQL representation of a Movie
#[derive(Clone)]
pub struct Movie {
    pub inner: DomainMovie,
}

impl From<DomainMovie> for Movie {
    fn from(movie: DomainMovie) -> Self {
        Self { inner: movie }
    }
}

#[Object]
impl Movie {
    /// The unique identifier for the movie
    async fn id(&self) -> ID {
        ID(self.inner.id.clone().unwrap_or_default())
    }

    /// The title of the movie
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// The genre of the movie
    async fn genre(&self) -> &str {
        &self.inner.genre
    }

    /// Id of the director this movie references. May point at a director
    /// that no longer exists.
    async fn director_id(&self) -> Option<ID> {
        self.inner.director_id.clone().map(ID)
    }

    /// The director of this movie
    async fn director(&self, ctx: &Context<'_>) -> FieldResult<Option<super::director::Director>> {
        let context = ctx.data::<GraphQLContext>()?;

        match self.inner.director_id.as_deref() {
            Some(director_id) => match context.store.get_director_by_id(director_id).await {
                Ok(director) => Ok(director.map(|d| d.into())),
                Err(e) => Err(e.into()),
            },
            None => Ok(None),
        }
    }
}
