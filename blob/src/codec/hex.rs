// SPDX-License-Identifier: Apache-2.0

use crate::{BlobOptions, DecodeError, MutableBlob};
use super::{Codec, CodecKind, lookup_table, Symbols, whole_units};

static NIBBLES: [u8; 256] = {
	let mut table = lookup_table(b"0123456789ABCDEF");
	let lower = b"abcdef";
	let mut i = 0;
	while i < lower.len() {
		table[lower[i] as usize] = 10 + i as u8;
		i += 1;
	}
	table
};

/// Uppercase hexadecimal, two digits per byte, high nibble first. Decoding
/// accepts either case.
pub struct Hex;

impl Hex {
	fn decode_units(text: &[u8], options: BlobOptions, symbols: &mut Symbols) -> MutableBlob {
		let mut out = MutableBlob::zeroed(text.len() / 2, options);
		for (i, (byte, pair)) in out.as_mut_slice().iter_mut().zip(text.chunks_exact(2)).enumerate() {
			let hi = symbols.digit(i * 2, pair[0]);
			let lo = symbols.digit(i * 2 + 1, pair[1]);
			*byte = hi << 4 | lo;
		}
		out
	}
}

impl Codec for Hex {
	const KIND: CodecKind = CodecKind::Hex;

	fn encode_into<'a>(data: &[u8], dst: &'a mut String) -> &'a str {
		let cur_len = dst.len();
		let enc_len = base16ct::encoded_len(data);
		dst.reserve(enc_len);
		unsafe {
			// Safety: The UTF-8 constraint is held since only hex digits are written
			// to the string. set_len is safe since the added bytes are initialized by
			// encode immediately after. Finally, the unwrap can be unchecked because
			// the slice is exactly large enough to fit the encoded digits.
			let buf = dst.as_mut_vec();
			buf.set_len(cur_len + enc_len);
			let buf = &mut buf.as_mut_slice()[cur_len..];
			base16ct::upper::encode_str(data, buf).unwrap_unchecked()
		}
	}

	fn decode(text: &[u8], options: BlobOptions) -> MutableBlob {
		let mut symbols = Symbols::new(Self::KIND, &NIBBLES);
		let out = Self::decode_units(whole_units(Self::KIND, text, 2), options, &mut symbols);
		symbols.finish();
		out
	}

	fn try_decode(text: &[u8], options: BlobOptions) -> Result<MutableBlob, DecodeError> {
		if text.len() % 2 != 0 {
			return Err(DecodeError::InvalidLength { codec: Self::KIND, len: text.len() })
		}

		let mut symbols = Symbols::new(Self::KIND, &NIBBLES);
		let out = Self::decode_units(text, options, &mut symbols);
		symbols.check()?;
		Ok(out)
	}
}
