//! `yamlrev_core` reads a multi-document YAML stream, reverses the order of
//! its documents and writes them back out with the same `---` separators.
//!
//! ## Processing Pipeline
//!
//! ```text
//! stdin bytes
//!   -> read_input   (whole stream into memory)
//!   -> Decoder      (one Document per YAML document, stops at the first error)
//!   -> DocumentSequence::reverse_in_place
//!   -> Encoder      (one YAML document per Document, `---` between them)
//!   -> finish       (close and flush; failures here are only warnings)
//! ```
//!
//! ## Modules
//!
//! - [`stamp`] - `KEY VALUE` stamp files and `{KEY}` substitution used by the
//!   `stamper` binary.
//!
//! ## Quick Start
//!
//! ```rust
//! use yamlrev_core::reverse_stream;
//!
//! let input = "a: 1\n---\nb: 2\n";
//! let mut output = Vec::new();
//! let report = reverse_stream(input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(report.documents, 2);
//! let reversed = yamlrev_core::decode_all(&output).unwrap();
//! assert_eq!(reversed[0].get("b"), Some(&yamlrev_core::Document::from(2_u64)));
//! ```

pub use decoder::*;
pub use document::*;
pub use encoder::*;
pub use error::*;
pub use pipeline::*;
pub use sequence::*;

mod decoder;
mod document;
mod encoder;
mod error;
mod pipeline;
mod sequence;
pub mod stamp;
