// SPDX-License-Identifier: Apache-2.0

use simdutf8::compat::from_utf8;
use crate::{BlobOptions, MutableBlob, Utf8Error};

/// Passes bytes through unchanged, in both directions. Any byte string is its own
/// encoding; [`encode_utf8`](Self::encode_utf8) additionally views it as text,
/// which fails for bytes that aren't UTF-8.
pub struct Raw;

impl Raw {
	/// Returns `data` as is.
	#[inline]
	pub fn encode(data: &[u8]) -> &[u8] { data }

	/// Borrows `data` as UTF-8 text.
	#[inline]
	pub fn encode_utf8(data: &[u8]) -> Result<&str, Utf8Error> {
		from_utf8(data).map_err(Into::into)
	}

	/// Copies the bytes of `text` into a new mutable blob.
	#[inline]
	pub fn decode<T: AsRef<[u8]>>(text: T, options: BlobOptions) -> MutableBlob {
		MutableBlob::from_slice_with(text.as_ref(), options)
	}
}
