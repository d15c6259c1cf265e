use super::seed;
use super::CatalogStore;
use crate::domain::{Director, Movie};
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// In-memory catalog keyed by record id.
///
/// Each map preserves insertion order; removal shifts the remaining
/// records without reordering them. The mutex is held only across a
/// single synchronous map operation, so concurrent mutations serialize
/// at the store.
pub struct InMemoryCatalog {
    movies: Mutex<IndexMap<String, Movie>>,
    directors: Mutex<IndexMap<String, Director>>,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            movies: Mutex::new(IndexMap::new()),
            directors: Mutex::new(IndexMap::new()),
        }
    }

    /// Create a catalog pre-populated with the seed data.
    pub fn with_seed_data() -> Self {
        let catalog = Self::new();
        {
            let mut movies = catalog.movies.lock().unwrap();
            for movie in seed::seed_movies() {
                let id = movie.id.clone().unwrap_or_default();
                movies.insert(id, movie);
            }
        }
        {
            let mut directors = catalog.directors.lock().unwrap();
            for director in seed::seed_directors() {
                let id = director.id.clone().unwrap_or_default();
                directors.insert(id, director);
            }
        }
        catalog
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn create_movie(&self, movie: &mut Movie) -> Result<()> {
        let id = Uuid::new_v4().to_string();
        movie.id = Some(id.clone());

        let mut movies = self.movies.lock().unwrap();
        movies.insert(id.clone(), movie.clone());

        debug!("Created movie: {} with id {}", movie.name, id);
        Ok(())
    }

    async fn get_movie_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let movies = self.movies.lock().unwrap();
        Ok(movies.get(id).cloned())
    }

    async fn get_all_movies(&self) -> Result<Vec<Movie>> {
        let movies = self.movies.lock().unwrap();
        Ok(movies.values().cloned().collect())
    }

    async fn get_movies_by_director_id(&self, director_id: &str) -> Result<Vec<Movie>> {
        let movies = self.movies.lock().unwrap();
        let matching: Vec<Movie> = movies
            .values()
            .filter(|m| m.director_id.as_deref() == Some(director_id))
            .cloned()
            .collect();
        Ok(matching)
    }

    async fn update_movie(
        &self,
        id: &str,
        name: String,
        genre: String,
        director_id: Option<String>,
    ) -> Result<Movie> {
        let mut movies = self.movies.lock().unwrap();
        let movie = movies
            .get_mut(id)
            .ok_or_else(|| CatalogError::not_found("Movie", id))?;

        movie.name = name;
        movie.genre = genre;
        // An absent directorId detaches the movie from its director.
        movie.director_id = director_id;

        debug!("Updated movie: {} with id {}", movie.name, id);
        Ok(movie.clone())
    }

    async fn delete_movie(&self, id: &str) -> Result<Option<Movie>> {
        let mut movies = self.movies.lock().unwrap();
        let removed = movies.shift_remove(id);

        if removed.is_some() {
            debug!("Removed movie with id {}", id);
        }
        Ok(removed)
    }

    async fn create_director(&self, director: &mut Director) -> Result<()> {
        let id = Uuid::new_v4().to_string();
        director.id = Some(id.clone());

        let mut directors = self.directors.lock().unwrap();
        directors.insert(id.clone(), director.clone());

        debug!("Created director: {} with id {}", director.name, id);
        Ok(())
    }

    async fn get_director_by_id(&self, id: &str) -> Result<Option<Director>> {
        let directors = self.directors.lock().unwrap();
        Ok(directors.get(id).cloned())
    }

    async fn get_all_directors(&self) -> Result<Vec<Director>> {
        let directors = self.directors.lock().unwrap();
        Ok(directors.values().cloned().collect())
    }

    async fn update_director(&self, id: &str, name: String, age: i32) -> Result<Director> {
        let mut directors = self.directors.lock().unwrap();
        let director = directors
            .get_mut(id)
            .ok_or_else(|| CatalogError::not_found("Director", id))?;

        director.name = name;
        director.age = age;

        debug!("Updated director: {} with id {}", director.name, id);
        Ok(director.clone())
    }

    async fn delete_director(&self, id: &str) -> Result<Option<Director>> {
        let mut directors = self.directors.lock().unwrap();
        let removed = directors.shift_remove(id);

        if removed.is_some() {
            debug!("Removed director with id {}", id);
        }
        Ok(removed)
    }
}
