// SPDX-License-Identifier: Apache-2.0

use amplify_derive::Display;
use simdutf8::compat;
use thiserror::Error;

/// A UTF-8 decode error, raised when passing blob bytes through as text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind} UTF-8 byte sequence from index {valid_up_to}")]
pub struct Utf8Error {
	/// The length of the valid string before the error.
	pub valid_up_to: usize,
	/// The number of bytes in the invalid sequence, zero if the sequence was cut
	/// short by the end of the input.
	pub count: usize,
	/// The error kind.
	pub kind: Utf8ErrorKind
}

#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum Utf8ErrorKind {
	/// An invalid byte sequence.
	#[display("invalid")]
	InvalidSequence,
	/// An incomplete character byte sequence.
	#[display("incomplete")]
	IncompleteChar
}

impl Utf8Error {
	/// Returns the part of `input` containing valid UTF-8 according to
	/// `valid_up_to`. Returns `None` if `input` is not the slice this error was
	/// raised for.
	pub fn valid_in<'a>(&self, input: &'a [u8]) -> Option<&'a str> {
		input.get(..self.valid_up_to)
			 .and_then(|valid| simdutf8::basic::from_utf8(valid).ok())
	}
}

impl Utf8ErrorKind {
	pub fn is_invalid_sequence(&self) -> bool {
		matches!(self, Self::InvalidSequence)
	}

	pub fn is_incomplete_char(&self) -> bool {
		matches!(self, Self::IncompleteChar)
	}
}

impl From<compat::Utf8Error> for Utf8Error {
	fn from(value: compat::Utf8Error) -> Self {
		let valid_up_to = value.valid_up_to();
		match value.error_len() {
			Some(count) => Self {
				valid_up_to,
				count,
				kind: Utf8ErrorKind::InvalidSequence
			},
			None => Self {
				valid_up_to,
				count: 0,
				kind: Utf8ErrorKind::IncompleteChar
			}
		}
	}
}
