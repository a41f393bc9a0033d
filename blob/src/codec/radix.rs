// SPDX-License-Identifier: Apache-2.0

//! Base58 and base62, which treat the whole byte string as one big-endian
//! unsigned integer written in the target radix. Each leading zero byte maps to
//! one leading zero-digit symbol and back, since leading zeros vanish from the
//! integer.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use crate::container::zero_fill;
use crate::{BlobOptions, DecodeError, MutableBlob};
use super::{Codec, CodecKind, lookup_table, Symbols};

struct Alphabet {
	kind: CodecKind,
	symbols: &'static [u8],
	digits: [u8; 256],
	/// Encoded symbols per byte as a percentage, log(256) / log(radix) rounded up.
	expansion: usize,
}

static BASE58: Alphabet = Alphabet {
	kind: CodecKind::Base58,
	symbols: b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
	digits: lookup_table(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"),
	expansion: 138,
};

static BASE62: Alphabet = Alphabet {
	kind: CodecKind::Base62,
	symbols: b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
	digits: lookup_table(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"),
	expansion: 137,
};

impl Alphabet {
	fn radix(&self) -> u32 { self.symbols.len() as u32 }
	fn zero(&self) -> u8 { self.symbols[0] }

	fn encode_into<'a>(&self, data: &[u8], dst: &'a mut String) -> &'a str {
		let start = dst.len();
		let zeros = data.iter().take_while(|&&b| b == 0).count();
		let reserve = (data.len() - zeros) * self.expansion / 100 + 1 + zeros;
		dst.reserve(reserve);
		dst.extend((0..zeros).map(|_| char::from(self.zero())));

		let radix = BigUint::from(self.radix());
		let mut n = BigUint::from_bytes_be(&data[zeros..]);
		// Remainders come out least-significant first.
		let mut digits = Vec::with_capacity(reserve - zeros);
		while !n.is_zero() {
			let (quotient, remainder) = n.div_rem(&radix);
			let digit = remainder.iter_u32_digits().next().unwrap_or(0);
			digits.push(self.symbols[digit as usize]);
			n = quotient;
		}
		dst.extend(digits.iter().rev().map(|&symbol| char::from(symbol)));
		&dst[start..]
	}

	fn decode(&self, text: &[u8], options: BlobOptions, symbols: &mut Symbols) -> MutableBlob {
		let zero = self.zero();
		let zeros = text.iter().take_while(|&&symbol| symbol == zero).count();
		let mut n = BigUint::zero();
		for (index, &symbol) in text.iter().enumerate().skip(zeros) {
			n *= self.radix();
			n += u32::from(symbols.digit(index, symbol));
		}

		let len = ((n.bits() + 7) / 8) as usize;
		let mut out = MutableBlob::zeroed(zeros + len, options);
		if len > 0 {
			let mut bytes = n.to_bytes_be();
			out.as_mut_slice()[zeros..].copy_from_slice(&bytes);
			if out.scrub().is_zeros() {
				zero_fill(&mut bytes);
			}
		}
		out
	}

	fn try_decode(&self, text: &[u8], options: BlobOptions) -> Result<MutableBlob, DecodeError> {
		let mut symbols = Symbols::new(self.kind, &self.digits);
		let out = self.decode(text, options, &mut symbols);
		symbols.check()?;
		Ok(out)
	}

	fn decode_lossy(&self, text: &[u8], options: BlobOptions) -> MutableBlob {
		let mut symbols = Symbols::new(self.kind, &self.digits);
		let out = self.decode(text, options, &mut symbols);
		symbols.finish();
		out
	}
}

/// Bitcoin-style base58, which leaves out the look-alike symbols `0`, `O`, `I`,
/// and `l`.
pub struct Base58;

/// Alphanumeric base62: digits, then uppercase, then lowercase letters.
pub struct Base62;

macro_rules! radix_codec {
	($($codec:ident $alphabet:ident)+) => {
		$(
		impl Codec for $codec {
			const KIND: CodecKind = CodecKind::$codec;

			#[inline]
			fn encode_into<'a>(data: &[u8], dst: &'a mut String) -> &'a str {
				$alphabet.encode_into(data, dst)
			}

			#[inline]
			fn decode(text: &[u8], options: BlobOptions) -> MutableBlob {
				$alphabet.decode_lossy(text, options)
			}

			#[inline]
			fn try_decode(text: &[u8], options: BlobOptions) -> Result<MutableBlob, DecodeError> {
				$alphabet.try_decode(text, options)
			}
		}
		)+
	};
}

radix_codec! {
	Base58 BASE58
	Base62 BASE62
}
