use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: Option<String>,
    pub name: String,
    pub genre: String,
    /// Reference to a director by id. May dangle or be absent; nothing
    /// enforces that the referenced director exists.
    pub director_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Director {
    pub id: Option<String>,
    pub name: String,
    pub age: i32,
}
