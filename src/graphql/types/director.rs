use crate::domain::Director as DomainDirector;
use crate::graphql::schema::GraphQLContext;
use async_graphql::{Context, FieldResult, Object, ID};

/// GraphQL representation of a Director
#[derive(Clone)]
pub struct Director {
    pub inner: DomainDirector,
}

impl From<DomainDirector> for Director {
    fn from(director: DomainDirector) -> Self {
        Self { inner: director }
    }
}

#[Object]
impl Director {
    /// The unique identifier for the director
    async fn id(&self) -> ID {
        ID(self.inner.id.clone().unwrap_or_default())
    }

    /// The name of the director
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// The director's age
    async fn age(&self) -> i32 {
        self.inner.age
    }

    /// Movies in the catalog referencing this director
    async fn movies(&self, ctx: &Context<'_>) -> FieldResult<Vec<super::movie::Movie>> {
        let context = ctx.data::<GraphQLContext>()?;
        let director_id = self.inner.id.as_deref().ok_or("Director ID not available")?;

        match context.store.get_movies_by_director_id(director_id).await {
            Ok(movies) => Ok(movies.into_iter().map(|m| m.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }
}
