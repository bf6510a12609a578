//! # textwalk_dict
//!
//! A small in-memory dictionary: add, update, search and delete
//! definitions by exact word.
//!
//! ## Example
//!
//! ```rust
//! use textwalk_dict::{Dictionary, DictionaryError};
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.add("test", "this is just a test")?;
//!
//! assert_eq!(dictionary.search("test")?, "this is just a test");
//! assert_eq!(dictionary.add("test", "again"), Err(DictionaryError::WordExists));
//! # Ok::<(), DictionaryError>(())
//! ```

mod dictionary;
mod error;

pub use dictionary::Dictionary;
pub use error::DictionaryError;
