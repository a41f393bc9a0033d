// SPDX-License-Identifier: Apache-2.0

use crate::{BlobOptions, DecodeError, MutableBlob};
use super::{Codec, CodecKind, lookup_table, Symbols, whole_units};

static DIGITS: [u8; 256] = lookup_table(b"01");

/// Binary digits, eight `0` or `1` symbols per byte, most-significant bit first.
pub struct Binary;

impl Binary {
	fn decode_units(text: &[u8], options: BlobOptions, symbols: &mut Symbols) -> MutableBlob {
		let mut out = MutableBlob::zeroed(text.len() / 8, options);
		let groups = text.chunks_exact(8).enumerate();
		for (byte, (group, bits)) in out.as_mut_slice().iter_mut().zip(groups) {
			*byte = bits.iter().enumerate().fold(0, |acc, (i, &bit)|
				acc << 1 | symbols.digit(group * 8 + i, bit)
			);
		}
		out
	}
}

impl Codec for Binary {
	const KIND: CodecKind = CodecKind::Binary;

	fn encode_into<'a>(data: &[u8], dst: &'a mut String) -> &'a str {
		let start = dst.len();
		dst.reserve(data.len() * 8);
		for &byte in data {
			for shift in (0..8).rev() {
				dst.push(char::from(b'0' | (byte >> shift) & 1));
			}
		}
		&dst[start..]
	}

	fn decode(text: &[u8], options: BlobOptions) -> MutableBlob {
		let mut symbols = Symbols::new(Self::KIND, &DIGITS);
		let out = Self::decode_units(whole_units(Self::KIND, text, 8), options, &mut symbols);
		symbols.finish();
		out
	}

	fn try_decode(text: &[u8], options: BlobOptions) -> Result<MutableBlob, DecodeError> {
		if text.len() % 8 != 0 {
			return Err(DecodeError::InvalidLength { codec: Self::KIND, len: text.len() })
		}

		let mut symbols = Symbols::new(Self::KIND, &DIGITS);
		let out = Self::decode_units(text, options, &mut symbols);
		symbols.check()?;
		Ok(out)
	}
}
