// Copyright 2023 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod utf8;

pub use utf8::*;
use crate::CodecKind;

/// A container allocation failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("failed to allocate a container of {size} bytes")]
pub struct AllocError {
	/// The requested allocation size in bytes.
	pub size: usize,
}

/// An error returned by strict decoding, when the input could not have been
/// produced by the codec's encoder.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
	#[error("invalid {codec} symbol {symbol:#04X} at index {index}")]
	InvalidSymbol {
		codec: CodecKind,
		symbol: u8,
		index: usize,
	},
	#[error("invalid {codec} input length {len}")]
	InvalidLength {
		codec: CodecKind,
		len: usize,
	},
	#[error(transparent)]
	Alloc(#[from] AllocError),
}

impl DecodeError {
	/// Returns the codec which raised the error, or `None` for allocation errors.
	pub fn codec(&self) -> Option<CodecKind> {
		match self {
			Self::InvalidSymbol { codec, .. } |
			Self::InvalidLength { codec, .. } => Some(*codec),
			Self::Alloc(_) => None
		}
	}

	/// Returns `true` if the error is [`InvalidSymbol`](Self::InvalidSymbol).
	pub fn is_invalid_symbol(&self) -> bool {
		matches!(self, Self::InvalidSymbol { .. })
	}

	/// Returns `true` if the error is [`InvalidLength`](Self::InvalidLength).
	pub fn is_invalid_length(&self) -> bool {
		matches!(self, Self::InvalidLength { .. })
	}
}

#[cfg(test)]
mod test {
	use crate::{AllocError, CodecKind, DecodeError};

	#[test]
	fn display() {
		let err = DecodeError::InvalidSymbol {
			codec: CodecKind::Base58,
			symbol: b'0',
			index: 3,
		};
		assert_eq!(err.to_string(), "invalid base58 symbol 0x30 at index 3");
		let err = DecodeError::InvalidLength { codec: CodecKind::Hex, len: 5 };
		assert_eq!(err.to_string(), "invalid hex input length 5");
		let err: DecodeError = AllocError { size: 12 }.into();
		assert_eq!(err.to_string(), "failed to allocate a container of 12 bytes");
		assert_eq!(err.codec(), None);
	}
}
