// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::{Index, IndexMut};
use crate::container::Container;
use crate::{AllocError, Blob, BlobOptions, Codec, Compare, Comparison, Scrub};

/// A writable blob with sole ownership of its container.
///
/// A mutable blob always allocates its own container, even when created from a
/// [`Blob`], and can't be cloned, so no other blob can observe its writes. Once
/// written, it can be [frozen](Self::freeze) into a shareable `Blob`.
pub struct MutableBlob {
	container: Container,
	compare: Compare,
}

impl Default for MutableBlob {
	fn default() -> Self {
		Self {
			container: Container::empty(),
			compare: Compare::Fast,
		}
	}
}

impl MutableBlob {
	/// Creates a mutable blob of `len` zero bytes.
	pub fn zeroed(len: usize, options: BlobOptions) -> Self {
		Self {
			container: Container::zeroed(len, options.scrub),
			compare: options.compare,
		}
	}

	/// Creates a mutable blob of `len` zero bytes, returning an error if the
	/// allocation fails.
	pub fn try_zeroed(len: usize, options: BlobOptions) -> Result<Self, AllocError> {
		Ok(Self {
			container: Container::try_zeroed(len, options.scrub)?,
			compare: options.compare,
		})
	}

	/// Creates a mutable blob from a copy of `data`.
	pub fn from_slice_with(data: &[u8], options: BlobOptions) -> Self {
		Self {
			container: Container::copy_from(data, options.scrub),
			compare: options.compare,
		}
	}

	/// Creates a mutable blob from a copy of `data`, returning an error if the
	/// allocation fails.
	pub fn try_from_slice_with(data: &[u8], options: BlobOptions) -> Result<Self, AllocError> {
		Ok(Self {
			container: Container::try_copy_from(data, options.scrub)?,
			compare: options.compare,
		})
	}

	/// Creates a mutable blob from a copy of `blob`'s visible bytes, keeping its
	/// options.
	#[inline]
	pub fn from_blob(blob: &Blob) -> Self {
		Self::from_slice_with(blob.as_slice(), blob.options())
	}

	/// Creates a mutable blob from a copy of `blob`'s visible bytes.
	#[inline]
	pub fn from_blob_with(blob: &Blob, options: BlobOptions) -> Self {
		Self::from_slice_with(blob.as_slice(), options)
	}

	/// Converts into a shareable [`Blob`], moving the container rather than
	/// copying it.
	pub fn freeze(self) -> Blob {
		let Self { container, compare } = self;
		Blob::from_container(container, compare)
	}

	#[inline]
	pub fn len(&self) -> usize { self.container.len() }
	#[inline]
	pub fn is_empty(&self) -> bool { self.len() == 0 }
	#[inline]
	pub fn scrub(&self) -> Scrub { self.container.scrub() }
	#[inline]
	pub fn compare(&self) -> Compare { self.compare }
	pub fn options(&self) -> BlobOptions {
		BlobOptions::new()
			.with_scrub(self.scrub())
			.with_compare(self.compare)
	}

	#[inline]
	pub fn as_slice(&self) -> &[u8] { self.container.as_slice() }
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [u8] { self.container.as_mut_slice() }
	#[inline]
	pub fn as_ptr(&self) -> *const u8 { self.as_slice().as_ptr() }
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut u8 { self.as_mut_slice().as_mut_ptr() }

	/// Returns the byte at `index`, or `None` if `index` is out of bounds.
	#[inline]
	pub fn get(&self, index: usize) -> Option<&u8> {
		self.as_slice().get(index)
	}

	/// Returns the byte at `index` mutably, or `None` if `index` is out of bounds.
	#[inline]
	pub fn get_mut(&mut self, index: usize) -> Option<&mut u8> {
		self.as_mut_slice().get_mut(index)
	}

	/// Returns the byte at `index` without bounds checking.
	///
	/// # Safety
	///
	/// `index` must be less than [`len`](Self::len).
	#[inline]
	pub unsafe fn get_unchecked(&self, index: usize) -> &u8 {
		debug_assert!(index < self.len());
		self.as_slice().get_unchecked(index)
	}

	/// Returns the byte at `index` mutably without bounds checking.
	///
	/// # Safety
	///
	/// `index` must be less than [`len`](Self::len).
	#[inline]
	pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut u8 {
		debug_assert!(index < self.len());
		self.as_mut_slice().get_unchecked_mut(index)
	}

	/// Compares with `other` using `compare` rather than the bound policy.
	#[inline]
	pub fn compare_with(&self, other: &[u8], compare: Compare) -> Comparison {
		compare.compare(self.as_slice(), other)
	}

	/// Encodes the data with a codec.
	#[inline]
	pub fn encode<C: Codec>(&self) -> String {
		C::encode(self.as_slice())
	}
}

impl fmt::Debug for MutableBlob {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut dbg = f.debug_struct("MutableBlob");
		dbg.field("len", &self.len())
		   .field("scrub", &self.scrub())
		   .field("compare", &self.compare);
		if self.scrub().is_none() {
			dbg.field("data", &self.as_slice());
		}
		dbg.finish_non_exhaustive()
	}
}

impl Index<usize> for MutableBlob {
	type Output = u8;

	fn index(&self, index: usize) -> &Self::Output {
		&self.as_slice()[index]
	}
}

impl IndexMut<usize> for MutableBlob {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.as_mut_slice()[index]
	}
}

impl PartialEq for MutableBlob {
	fn eq(&self, other: &Self) -> bool {
		!self.compare.differs(self.as_slice(), other.as_slice())
	}
}

impl Eq for MutableBlob { }

impl PartialEq<Blob> for MutableBlob {
	fn eq(&self, other: &Blob) -> bool {
		!self.compare.differs(self.as_slice(), other.as_slice())
	}
}

impl PartialEq<[u8]> for MutableBlob {
	fn eq(&self, other: &[u8]) -> bool {
		!self.compare.differs(self.as_slice(), other)
	}
}

impl From<&Blob> for MutableBlob {
	fn from(value: &Blob) -> Self {
		Self::from_blob(value)
	}
}

impl AsRef<[u8]> for MutableBlob {
	fn as_ref(&self) -> &[u8] { self.as_slice() }
}

impl AsMut<[u8]> for MutableBlob {
	fn as_mut(&mut self) -> &mut [u8] { self.as_mut_slice() }
}

#[cfg(test)]
mod test {
	use crate::{Blob, BlobOptions, MutableBlob, Scrub};

	#[test]
	fn never_aliases_source() {
		let blob = Blob::from_slice(&[1, 2, 3, 4]);
		let mut mutable = MutableBlob::from_blob(&blob.subset(2, 1));
		assert_ne!(mutable.as_ptr(), blob.as_ptr().wrapping_add(1));
		mutable[0] = 9;
		assert_eq!(blob.as_slice(), &[1, 2, 3, 4]);
		assert_eq!(mutable.as_slice(), &[9, 3]);
	}

	#[test]
	fn freeze_moves_container() {
		let mut mutable = MutableBlob::zeroed(4, BlobOptions::secret());
		mutable.as_mut_slice().copy_from_slice(b"key!");
		let ptr = mutable.as_ptr();
		let blob = mutable.freeze();
		assert_eq!(blob.as_ptr(), ptr);
		assert_eq!(blob.as_slice(), b"key!");
		assert_eq!(blob.options(), BlobOptions::secret());
	}

	#[test]
	fn copy_into_blob() {
		let mut mutable = MutableBlob::from_slice_with(&[5, 6], BlobOptions::new().zeroed_on_release());
		let blob = Blob::from(&mutable);
		assert_ne!(blob.as_ptr(), mutable.as_ptr());
		*mutable.get_mut(1).unwrap() = 0;
		assert_eq!(blob.as_slice(), &[5, 6]);
		assert_eq!(blob.scrub(), Scrub::Zeros);
		assert_eq!(mutable.get(2), None);
	}
}
