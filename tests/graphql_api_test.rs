use anyhow::Result;
use cinegraph::graphql::{create_schema, GraphQLSchema};
use cinegraph::storage::{CatalogStore, InMemoryCatalog};
use serde_json::{json, Value};
use std::sync::Arc;

fn seeded_schema() -> GraphQLSchema {
    let store: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalog::with_seed_data());
    create_schema(store)
}

async fn execute(schema: &GraphQLSchema, query: &str) -> Result<Value> {
    let response = schema.execute(query).await;
    anyhow::ensure!(
        response.errors.is_empty(),
        "unexpected GraphQL errors: {:?}",
        response.errors
    );
    Ok(response.data.into_json()?)
}

#[tokio::test]
async fn seed_records_are_queryable_by_id() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(&schema, r#"{ movie(id: "2") { id name genre directorId } }"#).await?;
    assert_eq!(
        data["movie"],
        json!({ "id": "2", "name": "1984", "genre": "Sci-Fi", "directorId": "2" })
    );

    let data = execute(&schema, r#"{ director(id: "4") { id name age } }"#).await?;
    assert_eq!(
        data["director"],
        json!({ "id": "4", "name": "Guy Ritchie", "age": 50 })
    );

    Ok(())
}

#[tokio::test]
async fn listings_return_full_catalog_in_insertion_order() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(&schema, "{ movies { name } directors { name } }").await?;

    let movies = data["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 8);
    assert_eq!(movies[0]["name"], "Pulp Fiction");
    assert_eq!(movies[4]["name"], "Reservoir Dogs");
    assert_eq!(movies[7]["name"], "Lock, Stock and Two Smoking Barrels");

    let directors = data["directors"].as_array().unwrap();
    assert_eq!(directors.len(), 4);
    assert_eq!(directors[0]["name"], "Quentin Tarantino");
    assert_eq!(directors[3]["name"], "Guy Ritchie");

    Ok(())
}

#[tokio::test]
async fn unknown_ids_resolve_to_null_without_errors() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(&schema, r#"{ movie(id: "42") { id } director(id: "42") { id } }"#).await?;
    assert_eq!(data["movie"], Value::Null);
    assert_eq!(data["director"], Value::Null);

    Ok(())
}

#[tokio::test]
async fn director_movies_relation_filters_by_reference() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(&schema, r#"{ director(id: "1") { movies { name } } }"#).await?;
    let names: Vec<&str> = data["director"]["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Pulp Fiction",
            "Reservoir Dogs",
            "The Hateful Eight",
            "Inglourious Basterds",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn movie_director_relation_follows_reference() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(&schema, r#"{ movie(id: "2") { director { name age } } }"#).await?;
    assert_eq!(
        data["movie"]["director"],
        json!({ "name": "Michael Radford", "age": 72 })
    );

    Ok(())
}

#[tokio::test]
async fn add_movie_appends_a_new_record() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(
        &schema,
        r#"mutation { addMovie(name: "Kill Bill", genre: "Action", directorId: "1") { id name genre directorId } }"#,
    )
    .await?;

    let added = &data["addMovie"];
    assert_eq!(added["name"], "Kill Bill");
    assert_eq!(added["genre"], "Action");
    assert_eq!(added["directorId"], "1");
    assert!(!added["id"].as_str().unwrap().is_empty());

    let data = execute(&schema, "{ movies { name } }").await?;
    let movies = data["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 9);
    assert_eq!(movies[8]["name"], "Kill Bill");

    Ok(())
}

#[tokio::test]
async fn add_director_succeeds() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(
        &schema,
        r#"mutation { addDirector(name: "Some Name", age: 40) { id name age } }"#,
    )
    .await?;

    let added = &data["addDirector"];
    assert_eq!(added["name"], "Some Name");
    assert_eq!(added["age"], 40);
    assert!(!added["id"].as_str().unwrap().is_empty());

    let data = execute(&schema, "{ directors { name } }").await?;
    assert_eq!(data["directors"].as_array().unwrap().len(), 5);

    Ok(())
}

#[tokio::test]
async fn remove_movie_returns_the_removed_record() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(&schema, r#"mutation { removeMovie(id: "5") { name } }"#).await?;
    assert_eq!(data["removeMovie"]["name"], "Reservoir Dogs");

    let data = execute(&schema, r#"{ movies { id } director(id: "1") { movies { name } } }"#).await?;
    let ids: Vec<&str> = data["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "6", "7", "8"]);
    assert_eq!(data["director"]["movies"].as_array().unwrap().len(), 3);

    // Removing an unknown id resolves to null and changes nothing.
    let data = execute(&schema, r#"mutation { removeMovie(id: "99") { name } }"#).await?;
    assert_eq!(data["removeMovie"], Value::Null);

    Ok(())
}

#[tokio::test]
async fn remove_director_leaves_dangling_movie_references() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(&schema, r#"mutation { removeDirector(id: "2") { name } }"#).await?;
    assert_eq!(data["removeDirector"]["name"], "Michael Radford");

    let data = execute(
        &schema,
        r#"{ movie(id: "2") { directorId director { name } } }"#,
    )
    .await?;
    assert_eq!(data["movie"]["directorId"], "2");
    assert_eq!(data["movie"]["director"], Value::Null);

    Ok(())
}

#[tokio::test]
async fn update_movie_without_director_id_detaches_it() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(
        &schema,
        r#"mutation { updateMovie(id: "1", name: "New Name", genre: "New Genre") { name genre directorId } }"#,
    )
    .await?;
    assert_eq!(
        data["updateMovie"],
        json!({ "name": "New Name", "genre": "New Genre", "directorId": Value::Null })
    );

    let data = execute(
        &schema,
        r#"{ movie(id: "1") { name genre directorId director { name } } }"#,
    )
    .await?;
    assert_eq!(data["movie"]["name"], "New Name");
    assert_eq!(data["movie"]["genre"], "New Genre");
    assert_eq!(data["movie"]["directorId"], Value::Null);
    assert_eq!(data["movie"]["director"], Value::Null);

    Ok(())
}

#[tokio::test]
async fn update_movie_can_reassign_the_director() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(
        &schema,
        r#"mutation { updateMovie(id: "2", name: "1984", genre: "Sci-Fi", directorId: "3") { directorId director { name } } }"#,
    )
    .await?;
    assert_eq!(data["updateMovie"]["directorId"], "3");
    assert_eq!(data["updateMovie"]["director"]["name"], "James McTeigue");

    Ok(())
}

#[tokio::test]
async fn update_director_overwrites_fields() -> Result<()> {
    let schema = seeded_schema();

    let data = execute(
        &schema,
        r#"mutation { updateDirector(id: "3", name: "J. McTeigue", age: 52) { id name age } }"#,
    )
    .await?;
    assert_eq!(
        data["updateDirector"],
        json!({ "id": "3", "name": "J. McTeigue", "age": 52 })
    );

    Ok(())
}

#[tokio::test]
async fn update_director_with_unknown_id_is_a_field_error() -> Result<()> {
    let schema = seeded_schema();

    let response = schema
        .execute(r#"mutation { updateDirector(id: "99", name: "Nobody", age: 1) { id } }"#)
        .await;
    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("not found"));

    let data = execute(&schema, "{ directors { name } }").await?;
    assert_eq!(data["directors"].as_array().unwrap().len(), 4);

    Ok(())
}
