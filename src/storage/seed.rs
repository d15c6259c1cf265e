use crate::domain::{Director, Movie};

fn movie(id: &str, name: &str, genre: &str, director_id: &str) -> Movie {
    Movie {
        id: Some(id.to_string()),
        name: name.to_string(),
        genre: genre.to_string(),
        director_id: Some(director_id.to_string()),
    }
}

fn director(id: &str, name: &str, age: i32) -> Director {
    Director {
        id: Some(id.to_string()),
        name: name.to_string(),
        age,
    }
}

/// The fixed initial movie catalog at process start.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        movie("1", "Pulp Fiction", "Crime", "1"),
        movie("2", "1984", "Sci-Fi", "2"),
        movie("3", "V for vendetta", "Sci-Fi-Triller", "3"),
        movie("4", "Snatch", "Crime-Comedy", "4"),
        movie("5", "Reservoir Dogs", "Crime", "1"),
        movie("6", "The Hateful Eight", "Crime", "1"),
        movie("7", "Inglourious Basterds", "Crime", "1"),
        movie("8", "Lock, Stock and Two Smoking Barrels", "Crime-Comedy", "4"),
    ]
}

/// The fixed initial director catalog at process start.
pub fn seed_directors() -> Vec<Director> {
    vec![
        director("1", "Quentin Tarantino", 55),
        director("2", "Michael Radford", 72),
        director("3", "James McTeigue", 51),
        director("4", "Guy Ritchie", 50),
    ]
}
