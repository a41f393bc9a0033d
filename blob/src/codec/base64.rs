// SPDX-License-Identifier: Apache-2.0

use ::base64::{DecodeError as Base64Error, Engine};
use ::base64::prelude::BASE64_STANDARD_NO_PAD;
use tracing::trace;
use crate::container::zero_fill;
use crate::{BlobOptions, DecodeError, MutableBlob};
use super::{Codec, CodecKind, lookup_table, Symbols};

static SEXTETS: [u8; 256] = lookup_table(
	b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"
);

/// Standard base64 without padding. Decoding takes groups of four symbols; two
/// or three leftover symbols decode to one or two trailing bytes, and a single
/// leftover symbol is dropped by best-effort decoding.
pub struct Base64;

impl Base64 {
	fn decoded_len(len: usize) -> usize {
		let rem = len % 4;
		len / 4 * 3 + if rem >= 2 { rem - 1 } else { 0 }
	}

	fn decode_lossy(text: &[u8], options: BlobOptions, symbols: &mut Symbols) -> MutableBlob {
		let mut out = MutableBlob::zeroed(Self::decoded_len(text.len()), options);
		let dst = out.as_mut_slice();
		for (i, (group, bytes)) in text.chunks(4).zip(dst.chunks_mut(3)).enumerate() {
			let mut sextets = [0u8; 4];
			for (j, (sextet, &symbol)) in sextets.iter_mut().zip(group).enumerate() {
				*sextet = symbols.digit(i * 4 + j, symbol);
			}
			let [a, b, c, d] = sextets;
			let decoded = [a << 2 | b >> 4, b << 4 | c >> 2, c << 6 | d];
			bytes.copy_from_slice(&decoded[..bytes.len()]);
		}
		out
	}
}

impl Codec for Base64 {
	const KIND: CodecKind = CodecKind::Base64;

	fn encode_into<'a>(data: &[u8], dst: &'a mut String) -> &'a str {
		let cur_len = dst.len();
		BASE64_STANDARD_NO_PAD.encode_string(data, dst);
		&dst[cur_len..]
	}

	fn decode(text: &[u8], options: BlobOptions) -> MutableBlob {
		if text.len() % 4 == 1 {
			trace!(codec = %Self::KIND, dropped = 1, "dropped incomplete trailing unit");
		}

		let mut symbols = Symbols::new(Self::KIND, &SEXTETS);
		let out = Self::decode_lossy(text, options, &mut symbols);
		symbols.finish();
		out
	}

	fn try_decode(text: &[u8], options: BlobOptions) -> Result<MutableBlob, DecodeError> {
		let invalid_length = DecodeError::InvalidLength { codec: Self::KIND, len: text.len() };
		if text.len() % 4 == 1 {
			return Err(invalid_length)
		}

		let mut decoded = BASE64_STANDARD_NO_PAD.decode(text).map_err(|err| match err {
			Base64Error::InvalidByte(index, symbol) |
			Base64Error::InvalidLastSymbol(index, symbol) => DecodeError::InvalidSymbol {
				codec: Self::KIND,
				symbol,
				index,
			},
			_ => invalid_length
		})?;
		let out = MutableBlob::try_from_slice_with(&decoded, options);
		if options.scrub.is_zeros() {
			zero_fill(&mut decoded);
		}
		Ok(out?)
	}
}

#[cfg(test)]
mod test {
	use crate::{BlobOptions, Codec};
	use super::Base64;

	#[test]
	fn unpadded() {
		assert_eq!(Base64::encode(b"T"), "VA");
		assert_eq!(Base64::encode(b"Te"), "VGU");
		assert_eq!(Base64::encode(b"Tes"), "VGVz");
	}

	#[test]
	fn stragglers() {
		assert_eq!(Base64::decode(b"VGVzdA", BlobOptions::new()).as_slice(), b"Test");
		assert_eq!(Base64::decode(b"VGVzdGU", BlobOptions::new()).as_slice(), b"Teste");
		// A lone leftover symbol has fewer than eight bits to give.
		assert_eq!(Base64::decode(b"VGVzd", BlobOptions::new()).as_slice(), b"Tes");
		assert!(Base64::try_decode(b"VGVzd", BlobOptions::new()).unwrap_err().is_invalid_length());
	}

	#[test]
	fn strict() {
		let err = Base64::try_decode(b"VG*z", BlobOptions::new()).unwrap_err();
		assert!(err.is_invalid_symbol());
		// Trailing bits must be zero in the last symbol.
		let err = Base64::try_decode(b"VB", BlobOptions::new()).unwrap_err();
		assert!(err.is_invalid_symbol());
		assert!(Base64::try_decode(b"VG==", BlobOptions::new()).is_err());
	}

	#[test]
	fn padding_symbols_decode_as_zero() {
		assert_eq!(Base64::decode(b"VA==", BlobOptions::new()).as_slice(), &[0x54, 0x00, 0x00]);
	}
}
