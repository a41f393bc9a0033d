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

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Bound, Index, RangeBounds};
use std::sync::Arc;
use std::fmt;
use once_cell::sync::Lazy;
use tracing::trace;
use crate::container::Container;
use crate::{AllocError, BlobOptions, Codec, Compare, Comparison, DecodeError, MutableBlob, Scrub};

static EMPTY: Lazy<Arc<Container>> = Lazy::new(|| Arc::new(Container::empty()));

/// A read-only, shareable window onto a container of bytes.
///
/// Cloning a blob or taking a [`subset`] of it shares the container without
/// copying any bytes; the container is released when the last blob referring to
/// it is dropped, running its scrub policy. Bytes seen through a blob never change,
/// "modifying" a blob with [`replace`] rebinds it to a new container instead.
///
/// Equality compares the visible bytes, not the container, using the comparison
/// policy bound to the left-hand blob.
///
/// [`subset`]: Self::subset
/// [`replace`]: Self::replace
#[derive(Clone)]
pub struct Blob {
	container: Arc<Container>,
	offset: usize,
	len: usize,
	compare: Compare,
}

impl Default for Blob {
	fn default() -> Self {
		Self {
			container: Arc::clone(&EMPTY),
			offset: 0,
			len: 0,
			compare: Compare::Fast,
		}
	}
}

impl Blob {
	/// Creates an empty blob.
	#[inline]
	pub fn new() -> Self { Self::default() }

	/// Creates a blob of `len` zero bytes.
	pub fn zeroed(len: usize, options: BlobOptions) -> Self {
		Self::from_container(Container::zeroed(len, options.scrub), options.compare)
	}

	/// Creates a blob of `len` zero bytes, returning an error if the allocation
	/// fails.
	pub fn try_zeroed(len: usize, options: BlobOptions) -> Result<Self, AllocError> {
		Container::try_zeroed(len, options.scrub)
			.map(|container| Self::from_container(container, options.compare))
	}

	/// Creates a blob from a copy of `data` with default options.
	#[inline]
	pub fn from_slice(data: &[u8]) -> Self {
		Self::from_slice_with(data, BlobOptions::default())
	}

	/// Creates a blob from a copy of `data`.
	pub fn from_slice_with(data: &[u8], options: BlobOptions) -> Self {
		Self::from_container(Container::copy_from(data, options.scrub), options.compare)
	}

	/// Creates a blob from a copy of `data`, returning an error if the allocation
	/// fails.
	pub fn try_from_slice_with(data: &[u8], options: BlobOptions) -> Result<Self, AllocError> {
		Container::try_copy_from(data, options.scrub)
			.map(|container| Self::from_container(container, options.compare))
	}

	/// Creates a blob from the concatenation of `blobs`, copied in order into a new
	/// container. The options of the parts are ignored in favor of `options`.
	pub fn concat<'a>(blobs: impl IntoIterator<Item = &'a Blob>, options: BlobOptions) -> Self {
		let blobs: Vec<_> = blobs.into_iter().collect();
		let len = blobs.iter().map(|blob| blob.len).sum();
		Self::concat_into(Container::zeroed(len, options.scrub), &blobs, options)
	}

	/// Creates a blob from the concatenation of `blobs`, returning an error if the
	/// allocation fails.
	pub fn try_concat<'a>(
		blobs: impl IntoIterator<Item = &'a Blob>,
		options: BlobOptions
	) -> Result<Self, AllocError> {
		let blobs: Vec<_> = blobs.into_iter().collect();
		let size = blobs.iter().try_fold(0usize, |acc, blob| acc.checked_add(blob.len));
		let Some(len) = size else {
			return Err(AllocError { size: usize::MAX })
		};
		Ok(Self::concat_into(Container::try_zeroed(len, options.scrub)?, &blobs, options))
	}

	fn concat_into(mut container: Container, blobs: &[&Blob], options: BlobOptions) -> Self {
		let mut pos = 0;
		let dst = container.as_mut_slice();
		for blob in blobs {
			dst[pos..pos + blob.len].copy_from_slice(blob.as_slice());
			pos += blob.len;
		}
		Self::from_container(container, options.compare)
	}

	/// Decodes `text` with a codec into a new blob with default options. Symbols
	/// outside the codec's alphabet are decoded as zero digits; use [`try_decode`]
	/// to reject them.
	///
	/// [`try_decode`]: Self::try_decode
	#[inline]
	pub fn decode<C: Codec>(text: impl AsRef<[u8]>) -> Self {
		Self::decode_with::<C>(text, BlobOptions::default())
	}

	/// Decodes `text` with a codec into a new blob.
	pub fn decode_with<C: Codec>(text: impl AsRef<[u8]>, options: BlobOptions) -> Self {
		C::decode(text.as_ref(), options).freeze()
	}

	/// Decodes `text` with a codec into a new blob, returning an error if `text`
	/// could not have been produced by the codec.
	pub fn try_decode<C: Codec>(text: impl AsRef<[u8]>, options: BlobOptions) -> Result<Self, DecodeError> {
		C::try_decode(text.as_ref(), options).map(MutableBlob::freeze)
	}

	pub(crate) fn from_container(container: Container, compare: Compare) -> Self {
		let len = container.len();
		Self {
			container: Arc::new(container),
			offset: 0,
			len,
			compare,
		}
	}

	/// Returns a blob sharing at most `len` bytes of this blob from `offset`. The
	/// bounds are clamped to this blob: an `offset` past the end yields an empty
	/// blob, and `len` is cut to the bytes remaining after `offset`.
	pub fn subset(&self, len: usize, offset: usize) -> Self {
		let clamped_offset = offset.min(self.len);
		let clamped_len = len.min(self.len - clamped_offset);
		if clamped_offset != offset || clamped_len != len {
			trace!(offset, len, clamped_offset, clamped_len, "clamped subset bounds");
		}

		Self {
			container: self.container.clone(),
			offset: self.offset + clamped_offset,
			len: clamped_len,
			compare: self.compare,
		}
	}

	/// Returns a blob sharing bytes within `range`, clamped as with [`subset`].
	///
	/// [`subset`]: Self::subset
	pub fn range<R: RangeBounds<usize>>(&self, range: R) -> Self {
		let start = match range.start_bound() {
			Bound::Included(&start) => start,
			Bound::Excluded(&start) => start.saturating_add(1),
			Bound::Unbounded => 0,
		};
		let end = match range.end_bound() {
			Bound::Included(&end) => end.saturating_add(1),
			Bound::Excluded(&end) => end,
			Bound::Unbounded => self.len,
		};
		self.subset(end.saturating_sub(start), start)
	}

	/// Rebinds the blob to a copy of `data`. Other blobs sharing the previous
	/// container are unaffected.
	pub fn replace(&mut self, data: &[u8], options: BlobOptions) {
		*self = Self::from_slice_with(data, options);
	}

	/// Rebinds the blob to a copy of `data`, returning an error if the allocation
	/// fails. The blob is left unchanged on error.
	pub fn try_replace(&mut self, data: &[u8], options: BlobOptions) -> Result<(), AllocError> {
		*self = Self::try_from_slice_with(data, options)?;
		Ok(())
	}

	/// Rebinds the blob to an empty container with default options.
	pub fn clear(&mut self) {
		*self = Self::new();
	}

	/// Returns the length in bytes of the visible data.
	#[inline]
	pub fn len(&self) -> usize { self.len }
	/// Returns `true` if the blob is empty.
	#[inline]
	pub fn is_empty(&self) -> bool { self.len == 0 }

	/// Returns the scrub policy of the underlying container.
	#[inline]
	pub fn scrub(&self) -> Scrub { self.container.scrub() }
	/// Returns the comparison policy bound to this blob.
	#[inline]
	pub fn compare(&self) -> Compare { self.compare }
	/// Returns the blob's options.
	pub fn options(&self) -> BlobOptions {
		BlobOptions::new()
			.with_scrub(self.scrub())
			.with_compare(self.compare)
	}

	/// Returns `true` if the container is shared with another blob.
	pub fn is_shared(&self) -> bool { Arc::strong_count(&self.container) > 1 }

	/// Returns the visible data.
	#[inline]
	pub fn as_slice(&self) -> &[u8] {
		&self.container.as_slice()[self.offset..self.offset + self.len]
	}

	/// Returns a pointer to the first visible byte.
	#[inline]
	pub fn as_ptr(&self) -> *const u8 { self.as_slice().as_ptr() }

	/// Returns the byte at `index`, or `None` if `index` is out of bounds.
	#[inline]
	pub fn get(&self, index: usize) -> Option<&u8> {
		self.as_slice().get(index)
	}

	/// Returns the byte at `index` without bounds checking.
	///
	/// # Safety
	///
	/// `index` must be less than [`len`](Self::len). Reading out of bounds is
	/// undefined behavior.
	#[inline]
	pub unsafe fn get_unchecked(&self, index: usize) -> &u8 {
		debug_assert!(index < self.len, "index {index} should be less than {}", self.len);
		self.container
			.as_slice()
			.get_unchecked(self.offset + index)
	}

	/// Compares with `other` using `compare` rather than the bound policy.
	#[inline]
	pub fn compare_with(&self, other: &Self, compare: Compare) -> Comparison {
		compare.compare(self.as_slice(), other.as_slice())
	}

	/// Encodes the visible data with a codec.
	#[inline]
	pub fn encode<C: Codec>(&self) -> String {
		C::encode(self.as_slice())
	}
}

impl fmt::Debug for Blob {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut dbg = f.debug_struct("Blob");
		dbg.field("len", &self.len)
		   .field("scrub", &self.scrub())
		   .field("compare", &self.compare);
		if self.scrub().is_none() {
			dbg.field("data", &self.as_slice());
		}
		dbg.finish_non_exhaustive()
	}
}

impl Index<usize> for Blob {
	type Output = u8;

	fn index(&self, index: usize) -> &Self::Output {
		&self.as_slice()[index]
	}
}

impl PartialEq for Blob {
	fn eq(&self, other: &Self) -> bool {
		!self.compare.differs(self.as_slice(), other.as_slice())
	}
}

impl Eq for Blob { }

impl PartialEq<[u8]> for Blob {
	fn eq(&self, other: &[u8]) -> bool {
		!self.compare.differs(self.as_slice(), other)
	}
}

impl PartialEq<MutableBlob> for Blob {
	fn eq(&self, other: &MutableBlob) -> bool {
		self == other.as_slice()
	}
}

impl Hash for Blob {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_slice().hash(state)
	}
}

impl From<&[u8]> for Blob {
	fn from(value: &[u8]) -> Self {
		Self::from_slice(value)
	}
}

impl From<&str> for Blob {
	fn from(value: &str) -> Self {
		Self::from_slice(value.as_bytes())
	}
}

impl From<Vec<u8>> for Blob {
	fn from(value: Vec<u8>) -> Self {
		Self::from_container(Container::from_vec(value, Scrub::None), Compare::Fast)
	}
}

impl From<String> for Blob {
	fn from(value: String) -> Self {
		value.into_bytes().into()
	}
}

impl From<&MutableBlob> for Blob {
	/// Copies the mutable blob's bytes into a new container, keeping its options.
	fn from(value: &MutableBlob) -> Self {
		Self::from_slice_with(value.as_slice(), value.options())
	}
}

impl From<MutableBlob> for Blob {
	#[inline]
	fn from(value: MutableBlob) -> Self {
		value.freeze()
	}
}

impl<'a> FromIterator<&'a Blob> for Blob {
	fn from_iter<T: IntoIterator<Item = &'a Blob>>(iter: T) -> Self {
		Self::concat(iter, BlobOptions::default())
	}
}

impl Add for &Blob {
	type Output = Blob;

	/// Concatenates two blobs into a new blob with the left-hand blob's options.
	fn add(self, rhs: Self) -> Blob {
		Blob::concat([self, rhs], self.options())
	}
}

impl AsRef<[u8]> for Blob {
	fn as_ref(&self) -> &[u8] { self.as_slice() }
}

impl Borrow<[u8]> for Blob {
	fn borrow(&self) -> &[u8] { self.as_slice() }
}
