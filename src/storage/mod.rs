mod in_memory;
mod seed;

pub use in_memory::InMemoryCatalog;

use crate::domain::{Director, Movie};
use crate::error::Result;
use async_trait::async_trait;

/// Storage trait for the movie/director catalog.
///
/// Lookups are keyed by the canonical string id. Reads on a missing id
/// return `Ok(None)`; updates on a missing id return a not-found error.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // Movie operations
    async fn create_movie(&self, movie: &mut Movie) -> Result<()>;
    async fn get_movie_by_id(&self, id: &str) -> Result<Option<Movie>>;
    async fn get_all_movies(&self) -> Result<Vec<Movie>>;
    async fn get_movies_by_director_id(&self, director_id: &str) -> Result<Vec<Movie>>;
    async fn update_movie(
        &self,
        id: &str,
        name: String,
        genre: String,
        director_id: Option<String>,
    ) -> Result<Movie>;
    async fn delete_movie(&self, id: &str) -> Result<Option<Movie>>;

    // Director operations
    async fn create_director(&self, director: &mut Director) -> Result<()>;
    async fn get_director_by_id(&self, id: &str) -> Result<Option<Director>>;
    async fn get_all_directors(&self) -> Result<Vec<Director>>;
    async fn update_director(&self, id: &str, name: String, age: i32) -> Result<Director>;
    async fn delete_director(&self, id: &str) -> Result<Option<Director>>;
}
