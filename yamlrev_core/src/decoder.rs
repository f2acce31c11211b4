use serde::Deserialize;
use serde_yaml_ng::Value;

use crate::Document;
use crate::DocumentSequence;
use crate::ReverserError;
use crate::ReverserResult;

/// Decodes the documents of a multi-document YAML stream one at a time.
///
/// Each call to `next` yields the next fully parsed document, `None` at the
/// end of the stream, or a single `Err` after which the decoder is exhausted.
/// Empty and whitespace-only input produce no documents.
pub struct Decoder<'de> {
	documents: serde_yaml_ng::Deserializer<'de>,
	decoded: usize,
	finished: bool,
}

impl<'de> Decoder<'de> {
	pub fn new(input: &'de [u8]) -> Self {
		Self {
			documents: serde_yaml_ng::Deserializer::from_slice(input),
			decoded: 0,
			finished: !has_documents(input),
		}
	}

	/// Number of documents yielded so far, including a failed one.
	pub fn position(&self) -> usize {
		self.decoded
	}
}

impl Iterator for Decoder<'_> {
	type Item = ReverserResult<Document>;

	fn next(&mut self) -> Option<Self::Item> {
		// The underlying iterator keeps yielding the same failure forever.
		if self.finished {
			return None;
		}

		let document = self.documents.next()?;
		self.decoded += 1;

		match Value::deserialize(document) {
			Ok(value) => Some(Ok(Document::from(value))),
			Err(error) => {
				self.finished = true;
				Some(Err(decode_error(self.decoded, &error)))
			}
		}
	}
}

/// Whether `input` holds at least one document.
///
/// The YAML parser reports a single empty document for a stream made only of
/// blank lines, comments and `...` end markers, while such a stream holds
/// none. Anything else, including a bare `---` or bytes that are not UTF-8,
/// is left to the parser.
fn has_documents(input: &[u8]) -> bool {
	let Ok(text) = std::str::from_utf8(input) else {
		return true;
	};

	text.trim_start_matches('\u{feff}').lines().any(|line| {
		let line = line.trim();
		!(line.is_empty() || line.starts_with('#') || line == "...")
	})
}

fn decode_error(document: usize, error: &serde_yaml_ng::Error) -> ReverserError {
	let location = error.location();
	let line = location.as_ref().map(serde_yaml_ng::Location::line);
	let column = location.as_ref().map(serde_yaml_ng::Location::column);

	// The location is rendered by the error itself; keep only the cause.
	let mut reason = error.to_string();
	if let (Some(line), Some(column)) = (line, column) {
		reason = reason.replacen(&format!(" at line {line} column {column}"), "", 1);
	}

	ReverserError::Decode {
		document,
		line,
		column,
		reason,
	}
}

/// Decode every document in `input`, stopping at the first malformed one.
pub fn decode_all(input: &[u8]) -> ReverserResult<DocumentSequence> {
	let mut sequence = DocumentSequence::new();

	for document in Decoder::new(input) {
		let document = document?;
		tracing::trace!(
			index = sequence.len() + 1,
			kind = document.kind(),
			"decoded document"
		);
		sequence.push(document);
	}

	Ok(sequence)
}
