//! # autocorrect
//!
//! Single-edit spelling correction over an edge-compressed trie.
//!
//! A vocabulary is loaded into a [`RadixTrie`](dictionary::RadixTrie) once.
//! Each query is then classified by a [`Transducer`](transducer::Transducer)
//! as an exact match, a list of words one edit away (insertion, deletion,
//! substitution or swap of adjacent characters), or no match.
//!
//! ## Example
//!
//! ```rust
//! use autocorrect::prelude::*;
//!
//! let dict = RadixTrie::from_terms(["cat", "cats", "cot"]);
//! let transducer = Transducer::new(dict);
//!
//! match transducer.correct("act") {
//!     Correction::Exact(word) => println!("{} - ok", word),
//!     Correction::Suggestions(words) => println!("act -> {}", words.join(", ")),
//!     Correction::NoMatch => println!("act -?"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dictionary;
pub mod distance;
pub mod transducer;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dictionary::{
        Dictionary, DictionaryError, DictionaryNode, RadixTrie, SharedDictionary,
    };
    pub use crate::transducer::{Buckets, Correction, Transducer};
}
