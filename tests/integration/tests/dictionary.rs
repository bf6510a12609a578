//! Integration tests for the dictionary collaborator

use pretty_assertions::assert_eq;
use textwalk_dict::{Dictionary, DictionaryError};

#[test]
fn full_lifecycle() {
    let mut dictionary = Dictionary::new();

    assert_eq!(dictionary.search("word"), Err(DictionaryError::NotFound));

    dictionary.add("word", "a unit of language").unwrap();
    assert_eq!(
        dictionary.add("word", "duplicate"),
        Err(DictionaryError::WordExists)
    );
    assert_eq!(dictionary.search("word"), Ok("a unit of language"));

    dictionary.update("word", "a single element of speech").unwrap();
    assert_eq!(dictionary.search("word"), Ok("a single element of speech"));

    dictionary.delete("word");
    assert_eq!(
        dictionary.update("word", "gone"),
        Err(DictionaryError::WordDoesNotExist)
    );
    assert!(dictionary.is_empty());
}

#[test]
fn loads_from_json_object() {
    let dictionary: Dictionary =
        serde_json::from_str(r#"{ "cat": "a small feline", "dog": "a loyal canine" }"#).unwrap();

    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.search("dog"), Ok("a loyal canine"));
}
