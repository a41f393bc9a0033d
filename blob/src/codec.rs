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

//! Binary-to-text codecs.
//!
//! Every codec decodes exactly what its encoder produces. Input the encoder could
//! not have produced is handled two ways: [`Codec::decode`] makes a best effort,
//! dropping a trailing incomplete unit and decoding out-of-alphabet symbols as
//! zero digits, while [`Codec::try_decode`] rejects it with a [`DecodeError`].

mod base64;
mod binary;
mod hex;
mod radix;
mod raw;

pub use self::base64::Base64;
pub use binary::Binary;
pub use hex::Hex;
pub use radix::{Base58, Base62};
pub use raw::Raw;

use amplify_derive::Display;
use tracing::{debug, trace};
use crate::{Blob, BlobOptions, DecodeError, MutableBlob, Utf8Error};

/// Identifies a codec in errors and log events.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
pub enum CodecKind {
	#[display("binary")]
	Binary,
	#[display("hex")]
	Hex,
	#[display("base58")]
	Base58,
	#[display("base62")]
	Base62,
	#[display("base64")]
	Base64,
}

/// A stateless pair of functions converting bytes to text and back.
pub trait Codec {
	const KIND: CodecKind;

	/// Writes `data` encoded to `dst`, returning a slice containing the written
	/// text.
	fn encode_into<'a>(data: &[u8], dst: &'a mut String) -> &'a str;

	/// Decodes `text` into a new mutable blob, making a best effort with input the
	/// encoder could not have produced.
	fn decode(text: &[u8], options: BlobOptions) -> MutableBlob;

	/// Decodes `text` into a new mutable blob, returning an error if the encoder
	/// could not have produced it.
	fn try_decode(text: &[u8], options: BlobOptions) -> Result<MutableBlob, DecodeError>;

	/// Returns a string containing `data` encoded.
	#[inline]
	fn encode(data: &[u8]) -> String {
		let mut buf = String::default();
		Self::encode_into(data, &mut buf);
		buf
	}
}

/// Marks an invalid entry in a symbol lookup table.
const INVALID: u8 = 0xFF;

/// Builds a table mapping each byte to its digit value in `alphabet`.
const fn lookup_table(alphabet: &[u8]) -> [u8; 256] {
	let mut table = [INVALID; 256];
	let mut digit = 0;
	while digit < alphabet.len() {
		table[alphabet[digit] as usize] = digit as u8;
		digit += 1;
	}
	table
}

/// Looks up symbol digits while decoding, substituting zero for symbols outside
/// the alphabet and keeping the first one for error reporting.
struct Symbols<'t> {
	codec: CodecKind,
	table: &'t [u8; 256],
	first_invalid: Option<(usize, u8)>,
	invalid: usize,
}

impl<'t> Symbols<'t> {
	fn new(codec: CodecKind, table: &'t [u8; 256]) -> Self {
		Self {
			codec,
			table,
			first_invalid: None,
			invalid: 0,
		}
	}

	#[inline]
	fn digit(&mut self, index: usize, symbol: u8) -> u8 {
		match self.table[symbol as usize] {
			INVALID => {
				self.first_invalid.get_or_insert((index, symbol));
				self.invalid += 1;
				0
			}
			digit => digit
		}
	}

	/// Logs any substitutions made in best-effort decoding.
	fn finish(self) {
		if let Some((index, symbol)) = self.first_invalid {
			debug!(
				codec = %self.codec,
				count = self.invalid,
				index,
				symbol,
				"decoded out-of-alphabet symbols as zero"
			);
		}
	}

	/// Returns an error for the first out-of-alphabet symbol, if any.
	fn check(self) -> Result<(), DecodeError> {
		match self.first_invalid {
			Some((index, symbol)) => Err(DecodeError::InvalidSymbol {
				codec: self.codec,
				symbol,
				index,
			}),
			None => Ok(())
		}
	}
}

/// Cuts `text` to a whole number of `unit`-symbol groups.
fn whole_units(codec: CodecKind, text: &[u8], unit: usize) -> &[u8] {
	let len = text.len() / unit * unit;
	if len < text.len() {
		trace!(codec = %codec, dropped = text.len() - len, "dropped incomplete trailing unit");
	}
	&text[..len]
}

mod private {
	pub trait EncodeSpec {
		fn bytes(&self) -> &[u8];
	}

	impl EncodeSpec for super::Blob {
		#[inline]
		fn bytes(&self) -> &[u8] { self.as_slice() }
	}

	impl EncodeSpec for super::MutableBlob {
		#[inline]
		fn bytes(&self) -> &[u8] { self.as_slice() }
	}
}

/// Encodes blob data into text.
pub trait EncodeBytes: private::EncodeSpec {
	/// Writes the data encoded with a codec to `target`, returning a slice
	/// containing the written data.
	#[inline]
	fn encode_into<'a, C: Codec>(&self, target: &'a mut String) -> &'a str {
		C::encode_into(self.bytes(), target)
	}

	/// Returns a string containing the data encoded into binary digits.
	#[inline]
	fn binary_string(&self) -> String {
		Binary::encode(self.bytes())
	}

	/// Returns a string containing the data encoded into uppercase hex.
	#[inline]
	fn hex_string(&self) -> String {
		Hex::encode(self.bytes())
	}

	/// Returns a string containing the data encoded into base58.
	#[inline]
	fn base58_string(&self) -> String {
		Base58::encode(self.bytes())
	}

	/// Returns a string containing the data encoded into base62.
	#[inline]
	fn base62_string(&self) -> String {
		Base62::encode(self.bytes())
	}

	/// Returns a string containing the data encoded into unpadded base64.
	#[inline]
	fn base64_string(&self) -> String {
		Base64::encode(self.bytes())
	}

	/// Returns the data as UTF-8 text, without copying.
	#[inline]
	fn utf8(&self) -> Result<&str, Utf8Error> {
		Raw::encode_utf8(self.bytes())
	}
}

impl<T: private::EncodeSpec> EncodeBytes for T { }

impl Blob {
	/// Decodes binary digits into a new blob, rejecting malformed input.
	pub fn from_binary<T: AsRef<[u8]>>(input: T) -> Result<Self, DecodeError> {
		Self::try_decode::<Binary>(input, BlobOptions::default())
	}

	/// Decodes uppercase or lowercase hex into a new blob, rejecting malformed
	/// input.
	pub fn from_hex<T: AsRef<[u8]>>(input: T) -> Result<Self, DecodeError> {
		Self::try_decode::<Hex>(input, BlobOptions::default())
	}

	/// Decodes base58 into a new blob, rejecting malformed input.
	pub fn from_base58<T: AsRef<[u8]>>(input: T) -> Result<Self, DecodeError> {
		Self::try_decode::<Base58>(input, BlobOptions::default())
	}

	/// Decodes base62 into a new blob, rejecting malformed input.
	pub fn from_base62<T: AsRef<[u8]>>(input: T) -> Result<Self, DecodeError> {
		Self::try_decode::<Base62>(input, BlobOptions::default())
	}

	/// Decodes unpadded base64 into a new blob, rejecting malformed input.
	pub fn from_base64<T: AsRef<[u8]>>(input: T) -> Result<Self, DecodeError> {
		Self::try_decode::<Base64>(input, BlobOptions::default())
	}
}
