//! Build stamp substitution.
//!
//! Stamp info files hold one `KEY VALUE` pair per line, split on the first
//! space. The collected variables replace `{KEY}` placeholders in a format
//! string:
//!
//! ```rust
//! use yamlrev_core::stamp::StampVariables;
//!
//! let mut vars = StampVariables::new();
//! vars.parse_str("BUILD_USER alice\nBUILD_HOST ci-07\n", "stable-status.txt");
//! assert_eq!(
//! 	vars.substitute("Built by {BUILD_USER} on {BUILD_HOST}"),
//! 	"Built by alice on ci-07"
//! );
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;

use crate::ReverserError;
use crate::ReverserResult;

/// A non-fatal problem found while loading stamp files.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StampWarning {
	/// A non-empty line without a space separator. It is skipped.
	MalformedLine {
		source: String,
		line: usize,
		content: String,
	},
	/// A key that was already defined. The newer value wins.
	DuplicateKey {
		key: String,
		value: String,
		source: String,
	},
}

impl std::fmt::Display for StampWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::MalformedLine {
				source,
				line,
				content,
			} => write!(f, "malformed line {line} in {source:?}: {content:?}"),
			Self::DuplicateKey { key, value, source } => {
				write!(f, "duplicate value for key {key:?}: using {value:?} (from {source})")
			}
		}
	}
}

/// Variables collected from stamp info files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StampVariables {
	values: BTreeMap<String, String>,
}

impl StampVariables {
	pub fn new() -> Self {
		Self::default()
	}

	/// Read every file in order. Later files override earlier ones.
	pub fn load<P: AsRef<Path>>(paths: &[P]) -> ReverserResult<(Self, Vec<StampWarning>)> {
		let mut variables = Self::new();
		let mut warnings = Vec::new();

		for path in paths {
			warnings.extend(variables.read_file(path.as_ref())?);
		}

		Ok((variables, warnings))
	}

	/// Read a single stamp info file into this set.
	pub fn read_file(&mut self, path: &Path) -> ReverserResult<Vec<StampWarning>> {
		let source = path.display().to_string();
		let file = File::open(path).map_err(|e| ReverserError::StampFileOpen {
			path: source.clone(),
			reason: e.to_string(),
		})?;

		let mut warnings = Vec::new();
		for (index, line) in BufReader::new(file).lines().enumerate() {
			let line = line.map_err(|e| ReverserError::StampFileRead {
				path: source.clone(),
				reason: e.to_string(),
			})?;
			if let Some(warning) = self.parse_line(&line, index + 1, &source) {
				warnings.push(warning);
			}
		}

		tracing::debug!(path = %source, variables = self.len(), "loaded stamp file");
		Ok(warnings)
	}

	/// Parse stamp lines from an in-memory string. `source` names the origin
	/// in warnings.
	pub fn parse_str(&mut self, content: &str, source: &str) -> Vec<StampWarning> {
		content
			.lines()
			.enumerate()
			.filter_map(|(index, line)| self.parse_line(line, index + 1, source))
			.collect()
	}

	fn parse_line(&mut self, line: &str, number: usize, source: &str) -> Option<StampWarning> {
		let line = line.strip_suffix('\r').unwrap_or(line);
		if line.is_empty() {
			return None;
		}

		let Some((key, value)) = line.split_once(' ') else {
			tracing::debug!(source, line = number, "skipping malformed stamp line");
			return Some(StampWarning::MalformedLine {
				source: source.to_string(),
				line: number,
				content: line.to_string(),
			});
		};

		self.insert(key, value)
			.map(|_| StampWarning::DuplicateKey {
				key: key.to_string(),
				value: value.to_string(),
				source: source.to_string(),
			})
	}

	/// Set `key` to `value`, returning the value it replaced.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.values.insert(key.into(), value.into())
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.values.get(key).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Replace every `{KEY}` in `format` with its value.
	///
	/// The format is scanned once from the left and replaced text is never
	/// rescanned. Unknown placeholders are kept as written. When placeholders
	/// overlap at one position the longest one is used.
	pub fn substitute(&self, format: &str) -> String {
		let placeholders: Vec<(String, &str)> = self
			.values
			.iter()
			.map(|(key, value)| (format!("{{{key}}}"), value.as_str()))
			.collect();

		let mut output = String::with_capacity(format.len());
		let mut rest = format;

		while let Some(offset) = rest.find('{') {
			output.push_str(&rest[..offset]);
			rest = &rest[offset..];

			let matched = placeholders
				.iter()
				.filter(|(placeholder, _)| rest.starts_with(placeholder.as_str()))
				.max_by_key(|(placeholder, _)| placeholder.len());

			if let Some((placeholder, value)) = matched {
				output.push_str(value);
				rest = &rest[placeholder.len()..];
			} else {
				output.push('{');
				rest = &rest[1..];
			}
		}

		output.push_str(rest);
		output
	}
}

/// Write the substituted text to `path`, creating or truncating it.
pub fn write_stamp_output(path: &Path, content: &str) -> ReverserResult<()> {
	let to_error = |e: std::io::Error| {
		ReverserError::OutputWrite {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	};

	let mut options = OpenOptions::new();
	options.write(true).create(true).truncate(true);
	#[cfg(unix)]
	{
		use std::os::unix::fs::OpenOptionsExt;
		options.mode(0o644);
	}

	let mut file = options.open(path).map_err(to_error)?;
	file.write_all(content.as_bytes()).map_err(to_error)?;

	Ok(())
}
