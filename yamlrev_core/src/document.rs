use derive_more::Deref;
use derive_more::DerefMut;
use float_cmp::approx_eq;
use serde_yaml_ng::Value;
use serde_yaml_ng::value::Tag;
use serde_yaml_ng::value::TaggedValue;

/// A single decoded YAML document.
///
/// The variant set is closed: every traversal of a document matches it
/// exhaustively.
///
/// ```rust
/// use yamlrev_core::Document;
///
/// let doc = Document::from("hello");
/// assert_eq!(doc.kind(), "string");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Document {
	/// `~`, `null` or an empty node.
	#[default]
	Null,
	/// `true` or `false`.
	Bool(bool),
	/// An integer or floating-point scalar.
	Number(Number),
	/// Any other scalar.
	String(String),
	/// An ordered list of documents.
	Sequence(Vec<Document>),
	/// Key/value pairs. Keys are documents too, so `1: one` keeps its integer
	/// key.
	Mapping(Mapping),
	/// A node carrying an explicit tag such as `!Ref`. The tag is stored
	/// without its leading `!`.
	Tagged { tag: String, value: Box<Document> },
}

impl Document {
	/// A short name for the variant, used in log output.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Number(_) => "number",
			Self::String(_) => "string",
			Self::Sequence(_) => "sequence",
			Self::Mapping(_) => "mapping",
			Self::Tagged { .. } => "tagged",
		}
	}

	/// Look up a string key when this document is a mapping.
	pub fn get(&self, key: &str) -> Option<&Document> {
		match self {
			Self::Mapping(mapping) => mapping.get(&Document::from(key)),
			Self::Tagged { value, .. } => value.get(key),
			_ => None,
		}
	}
}

impl From<&str> for Document {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for Document {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<bool> for Document {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Document {
	fn from(value: i64) -> Self {
		Self::Number(Number::from(value))
	}
}

impl From<u64> for Document {
	fn from(value: u64) -> Self {
		Self::Number(Number::from(value))
	}
}

impl From<f64> for Document {
	fn from(value: f64) -> Self {
		Self::Number(Number::from(value))
	}
}

impl From<Vec<Document>> for Document {
	fn from(value: Vec<Document>) -> Self {
		Self::Sequence(value)
	}
}

impl From<Mapping> for Document {
	fn from(value: Mapping) -> Self {
		Self::Mapping(value)
	}
}

/// A numeric scalar.
///
/// Non-negative integers are always stored as `Unsigned`, so the integer
/// variants never overlap.
#[derive(Debug, Clone, Copy)]
pub enum Number {
	Unsigned(u64),
	Signed(i64),
	Float(f64),
}

impl PartialEq for Number {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Unsigned(a), Self::Unsigned(b)) => a == b,
			(Self::Signed(a), Self::Signed(b)) => a == b,
			(Self::Unsigned(a), Self::Signed(b)) | (Self::Signed(b), Self::Unsigned(a)) => {
				i128::from(*a) == i128::from(*b)
			}
			(Self::Float(a), Self::Float(b)) => {
				(a.is_nan() && b.is_nan()) || approx_eq!(f64, *a, *b, ulps = 2)
			}
			_ => false,
		}
	}
}

impl From<u64> for Number {
	fn from(value: u64) -> Self {
		Self::Unsigned(value)
	}
}

impl From<i64> for Number {
	fn from(value: i64) -> Self {
		match u64::try_from(value) {
			Ok(unsigned) => Self::Unsigned(unsigned),
			Err(_) => Self::Signed(value),
		}
	}
}

impl From<f64> for Number {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl std::fmt::Display for Number {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Unsigned(value) => write!(f, "{value}"),
			Self::Signed(value) => write!(f, "{value}"),
			Self::Float(value) => write!(f, "{value}"),
		}
	}
}

/// The entries of a YAML mapping in the order they were read.
///
/// Equality ignores entry order: two mappings are equal when they hold the
/// same keys with equal values.
#[derive(Debug, Clone, Default, Deref, DerefMut)]
pub struct Mapping(Vec<(Document, Document)>);

impl Mapping {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert an entry, replacing the value of an existing equal key in place.
	/// Returns the replaced value.
	pub fn insert(&mut self, key: Document, value: Document) -> Option<Document> {
		if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
			return Some(std::mem::replace(&mut slot.1, value));
		}

		self.0.push((key, value));
		None
	}

	pub fn get(&self, key: &Document) -> Option<&Document> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}
}

impl PartialEq for Mapping {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
	}
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
	K: Into<Document>,
	V: Into<Document>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut mapping = Self::new();
		for (key, value) in iter {
			mapping.insert(key.into(), value.into());
		}
		mapping
	}
}

impl From<Value> for Document {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(b),
			Value::Number(n) => {
				let number = if let Some(unsigned) = n.as_u64() {
					Number::Unsigned(unsigned)
				} else if let Some(signed) = n.as_i64() {
					Number::Signed(signed)
				} else {
					Number::Float(n.as_f64().unwrap_or(f64::NAN))
				};
				Self::Number(number)
			}
			Value::String(s) => Self::String(s),
			Value::Sequence(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
			Value::Mapping(entries) => {
				Self::Mapping(Mapping(
					entries
						.into_iter()
						.map(|(k, v)| (Self::from(k), Self::from(v)))
						.collect(),
				))
			}
			Value::Tagged(tagged) => {
				let TaggedValue { tag, value } = *tagged;
				let tag = tag.to_string().trim_start_matches('!').to_string();

				// The non-specific tag `!` forces a scalar to be read as a string.
				if tag.is_empty() {
					return match value {
						Value::Bool(b) => Self::String(b.to_string()),
						Value::Number(n) => Self::String(n.to_string()),
						other => Self::from(other),
					};
				}

				Self::Tagged {
					tag,
					value: Box::new(Self::from(value)),
				}
			}
		}
	}
}

impl From<&Document> for Value {
	fn from(document: &Document) -> Self {
		match document {
			Document::Null => Value::Null,
			Document::Bool(b) => Value::Bool(*b),
			Document::Number(Number::Unsigned(n)) => Value::Number((*n).into()),
			Document::Number(Number::Signed(n)) => Value::Number((*n).into()),
			Document::Number(Number::Float(n)) => Value::Number((*n).into()),
			Document::String(s) => Value::String(s.clone()),
			Document::Sequence(items) => Value::Sequence(items.iter().map(Value::from).collect()),
			Document::Mapping(entries) => {
				let mut mapping = serde_yaml_ng::Mapping::with_capacity(entries.len());
				for (k, v) in entries.iter() {
					mapping.insert(Value::from(k), Value::from(v));
				}
				Value::Mapping(mapping)
			}
			Document::Tagged { tag, value } if tag.is_empty() => Value::from(&**value),
			Document::Tagged { tag, value } => {
				Value::Tagged(Box::new(TaggedValue {
					tag: Tag::new(tag.as_str()),
					value: Value::from(&**value),
				}))
			}
		}
	}
}
