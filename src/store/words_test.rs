use crate::store::{initialize_schema, StoreClient};
use tempfile::TempDir;

async fn setup_client() -> (StoreClient, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let client = StoreClient::open(temp_dir.path().join("kamusi.db"))
        .await
        .expect("Failed to open database");
    initialize_schema(&client)
        .await
        .expect("Failed to initialize schema");
    (client, temp_dir)
}

#[tokio::test]
async fn test_find_word_is_case_insensitive() {
    let (client, _temp) = setup_client().await;

    client
        .insert_word("Jua", "sun", None, None)
        .await
        .expect("Failed to insert word");

    let exact = client.find_word("Jua").await.expect("Failed to search");
    let upper = client.find_word("JUA").await.expect("Failed to search");
    let lower = client.find_word("jua").await.expect("Failed to search");

    let exact = exact.expect("Expected a match for exact casing");
    let upper = upper.expect("Expected a match for upper casing");
    let lower = lower.expect("Expected a match for lower casing");

    assert_eq!(exact.id, upper.id);
    assert_eq!(exact.id, lower.id);
    assert_eq!(exact.word, "Jua");
    assert_eq!(exact.meaning, "sun");
}

#[tokio::test]
async fn test_find_word_absent_returns_none() {
    let (client, _temp) = setup_client().await;

    let result = client.find_word("habari").await.expect("Failed to search");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_word_returns_first_of_duplicates() {
    let (client, _temp) = setup_client().await;

    client
        .insert_word("paa", "roof", None, None)
        .await
        .expect("Failed to insert first");
    client
        .insert_word("paa", "gazelle", None, None)
        .await
        .expect("Failed to insert second");

    let entry = client
        .find_word("paa")
        .await
        .expect("Failed to search")
        .expect("Expected a match");
    assert_eq!(entry.meaning, "roof", "First row in storage order wins");
}

#[tokio::test]
async fn test_optional_fields_roundtrip() {
    let (client, _temp) = setup_client().await;

    client
        .insert_word(
            "kwenda",
            "to go",
            Some("enda".to_string()),
            Some("ninakwenda, unakwenda".to_string()),
        )
        .await
        .expect("Failed to insert word with optional fields");
    client
        .insert_word("jua", "sun", None, None)
        .await
        .expect("Failed to insert word without optional fields");

    let kwenda = client
        .find_word("kwenda")
        .await
        .unwrap()
        .expect("Expected kwenda");
    assert_eq!(kwenda.synonyms, Some("enda".to_string()));
    assert_eq!(kwenda.conjugation, Some("ninakwenda, unakwenda".to_string()));

    let jua = client.find_word("jua").await.unwrap().expect("Expected jua");
    assert_eq!(jua.synonyms, None);
    assert_eq!(jua.conjugation, None);
}

#[tokio::test]
async fn test_insert_word_sets_timestamps() {
    let (client, _temp) = setup_client().await;

    client
        .insert_word("jua", "sun", None, None)
        .await
        .expect("Failed to insert word");

    let entry = client.find_word("jua").await.unwrap().expect("Expected jua");
    assert_eq!(entry.created_at, entry.updated_at);
}

#[tokio::test]
async fn test_find_words_containing() {
    let (client, _temp) = setup_client().await;

    client.insert_word("jua", "sun", None, None).await.unwrap();
    client.insert_word("juu", "up", None, None).await.unwrap();
    client.insert_word("paa", "roof", None, None).await.unwrap();

    let matches = client
        .find_words_containing("ju", 10)
        .await
        .expect("Failed to fuzzy search");

    let mut words: Vec<String> = matches.iter().map(|e| e.word.clone()).collect();
    words.sort();
    assert_eq!(words, vec!["jua".to_string(), "juu".to_string()]);
}

#[tokio::test]
async fn test_find_words_containing_respects_limit() {
    let (client, _temp) = setup_client().await;

    client.insert_word("jua", "sun", None, None).await.unwrap();
    client.insert_word("juu", "up", None, None).await.unwrap();

    let matches = client
        .find_words_containing("ju", 1)
        .await
        .expect("Failed to fuzzy search");
    assert_eq!(matches.len(), 1);
}
