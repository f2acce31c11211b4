use derive_more::Deref;
use derive_more::DerefMut;

use crate::Document;

/// The documents of one input stream, held in memory in stream order until
/// they are reversed.
#[derive(Debug, Clone, Default, PartialEq, Deref, DerefMut)]
pub struct DocumentSequence(Vec<Document>);

impl DocumentSequence {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reverse the documents in place by swapping from both ends toward the
	/// middle.
	pub fn reverse_in_place(&mut self) {
		let len = self.0.len();
		for front in 0..len / 2 {
			self.0.swap(front, len - 1 - front);
		}
	}

	/// Consume the sequence and return it reversed.
	#[must_use]
	pub fn reversed(mut self) -> Self {
		self.reverse_in_place();
		self
	}

	pub fn into_inner(self) -> Vec<Document> {
		self.0
	}
}

impl From<Vec<Document>> for DocumentSequence {
	fn from(documents: Vec<Document>) -> Self {
		Self(documents)
	}
}

impl FromIterator<Document> for DocumentSequence {
	fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for DocumentSequence {
	type IntoIter = std::vec::IntoIter<Document>;
	type Item = Document;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a DocumentSequence {
	type IntoIter = std::slice::Iter<'a, Document>;
	type Item = &'a Document;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Return `sequence` with its documents in the opposite order.
///
/// Applying this twice gives back the original sequence, and the length never
/// changes.
pub fn reverse(sequence: DocumentSequence) -> DocumentSequence {
	sequence.reversed()
}
