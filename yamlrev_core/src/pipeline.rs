use std::io::Read;
use std::io::Write;

use crate::Encoder;
use crate::ReverserError;
use crate::ReverserResult;
use crate::decode_all;
use crate::encode_all;

/// The stages a run moves through. Runs only ever move forward; a failure in
/// any stage ends the run there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
	Init,
	ReadingInput,
	Decoding,
	Reversing,
	Encoding,
	Done,
}

impl std::fmt::Display for Stage {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Init => "init",
			Self::ReadingInput => "reading input",
			Self::Decoding => "decoding",
			Self::Reversing => "reversing",
			Self::Encoding => "encoding",
			Self::Done => "done",
		};
		f.write_str(name)
	}
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct ReverseReport {
	/// Number of documents read and written.
	pub documents: usize,
	/// The error raised while closing the output stream, if any. A run that
	/// gets this far still counts as a success.
	pub flush_error: Option<ReverserError>,
}

impl ReverseReport {
	pub fn is_clean(&self) -> bool {
		self.flush_error.is_none()
	}
}

/// Read the whole of `reader` into memory.
pub fn read_input(mut reader: impl Read) -> ReverserResult<Vec<u8>> {
	let mut input = Vec::new();
	reader
		.read_to_end(&mut input)
		.map_err(ReverserError::InputRead)?;

	Ok(input)
}

/// Read every document from `reader` and write them to `writer` in reverse
/// order.
///
/// Nothing is written unless the whole input decodes. An encoding failure
/// leaves the documents before it in `writer`.
pub fn reverse_stream<R: Read, W: Write>(reader: R, writer: W) -> ReverserResult<ReverseReport> {
	let mut stage = Stage::Init;

	advance(&mut stage, Stage::ReadingInput);
	let input = read_input(reader)?;
	tracing::debug!(bytes = input.len(), "read input");

	advance(&mut stage, Stage::Decoding);
	let mut documents = decode_all(&input)?;
	drop(input);
	tracing::debug!(documents = documents.len(), "decoded input");

	advance(&mut stage, Stage::Reversing);
	documents.reverse_in_place();

	advance(&mut stage, Stage::Encoding);
	let mut encoder = Encoder::new(writer);
	let written = encode_all(&mut encoder, documents)?;
	let flush_error = encoder.finish().err();
	if let Some(error) = &flush_error {
		tracing::debug!(%error, "output stream did not close cleanly");
	}

	advance(&mut stage, Stage::Done);
	Ok(ReverseReport {
		documents: written,
		flush_error,
	})
}

fn advance(stage: &mut Stage, next: Stage) {
	debug_assert!(next > *stage, "stage {next} cannot follow {stage}");
	tracing::debug!(from = %stage, to = %next, "stage transition");
	*stage = next;
}
