use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ReverserError {
	#[error("failed to read input stream: {0}")]
	#[diagnostic(code(yamlrev::input_read))]
	InputRead(#[source] std::io::Error),

	#[error("failed to decode document {document}{}: {reason}", format_location(.line, .column))]
	#[diagnostic(
		code(yamlrev::decode),
		help("no output was written; fix document {document} and run again")
	)]
	Decode {
		document: usize,
		/// 1-based position reported by the YAML parser, when known.
		line: Option<usize>,
		column: Option<usize>,
		reason: String,
	},

	#[error("failed to encode document {document}: {reason}")]
	#[diagnostic(
		code(yamlrev::encode),
		help("documents before {document} have already been written")
	)]
	Encode { document: usize, reason: String },

	#[error("failed to flush output stream: {0}")]
	#[diagnostic(code(yamlrev::flush))]
	Flush(String),

	#[error("failed to open stamp file `{path}`: {reason}")]
	#[diagnostic(code(yamlrev::stamp_file_open))]
	StampFileOpen { path: String, reason: String },

	#[error("failed to read stamp file `{path}`: {reason}")]
	#[diagnostic(code(yamlrev::stamp_file_read))]
	StampFileRead { path: String, reason: String },

	#[error("failed to write output file `{path}`: {reason}")]
	#[diagnostic(
		code(yamlrev::output_write),
		help("check that the parent directory exists and is writable")
	)]
	OutputWrite { path: String, reason: String },
}

impl ReverserError {
	/// The 1-based index of the document this error refers to, if any.
	pub fn document(&self) -> Option<usize> {
		match self {
			Self::Decode { document, .. } | Self::Encode { document, .. } => Some(*document),
			_ => None,
		}
	}
}

#[allow(clippy::ref_option)]
fn format_location(line: &Option<usize>, column: &Option<usize>) -> String {
	match (line, column) {
		(Some(line), Some(column)) => format!(" at line {line} column {column}"),
		(Some(line), None) => format!(" at line {line}"),
		_ => String::new(),
	}
}

pub type ReverserResult<T> = Result<T, ReverserError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
