use std::io::Write;

use serde::Serialize;
use serde_yaml_ng::Value;

use crate::Document;
use crate::ReverserError;
use crate::ReverserResult;

/// Writes documents to a multi-document YAML stream.
///
/// A `---` separator is written before every document except the first. Each
/// document is flushed to the underlying writer as soon as it is encoded, so
/// a failure on a later document leaves the earlier ones in place.
pub struct Encoder<W: Write> {
	serializer: serde_yaml_ng::Serializer<W>,
	encoded: usize,
}

impl<W: Write> Encoder<W> {
	pub fn new(writer: W) -> Self {
		Self {
			serializer: serde_yaml_ng::Serializer::new(writer),
			encoded: 0,
		}
	}

	/// Number of documents successfully written.
	pub fn encoded(&self) -> usize {
		self.encoded
	}

	/// Serialize one document. Errors carry the 1-based index of the document
	/// within this encoder's output.
	pub fn encode(&mut self, document: &Document) -> ReverserResult<()> {
		let index = self.encoded + 1;
		let value = Value::from(document);

		value
			.serialize(&mut self.serializer)
			.map_err(|error| encode_error(index, &error))?;
		self.serializer
			.flush()
			.map_err(|error| encode_error(index, &error))?;

		self.encoded = index;
		Ok(())
	}

	/// Close the YAML stream and flush the writer.
	///
	/// Failures here are reported as [`ReverserError::Flush`].
	pub fn finish(self) -> ReverserResult<W> {
		let mut writer = self
			.serializer
			.into_inner()
			.map_err(|error| ReverserError::Flush(error.to_string()))?;
		writer
			.flush()
			.map_err(|error| ReverserError::Flush(error.to_string()))?;

		Ok(writer)
	}
}

fn encode_error(document: usize, error: &serde_yaml_ng::Error) -> ReverserError {
	ReverserError::Encode {
		document,
		reason: error.to_string(),
	}
}

/// Encode each document in order, dropping it once written.
///
/// Stops at the first failing document. Returns the number of documents
/// written; the encoder still has to be finished by the caller.
pub fn encode_all<W, I>(encoder: &mut Encoder<W>, documents: I) -> ReverserResult<usize>
where
	W: Write,
	I: IntoIterator<Item = Document>,
{
	for document in documents {
		encoder.encode(&document)?;
		tracing::trace!(index = encoder.encoded(), "encoded document");
	}

	Ok(encoder.encoded())
}
