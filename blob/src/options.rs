// SPDX-License-Identifier: Apache-2.0

use crate::{Compare, Scrub};

/// Options bound to a blob when it's constructed.
///
/// # Scrub
///
/// The disposal policy of the blob's container, run over the whole allocation
/// when the last blob sharing it is dropped. Defaults to [`Scrub::None`]. Blobs
/// made from others share their container, so they report that container's policy
/// whatever their own options said.
///
/// # Compare
///
/// The equality policy used by `==` and `!=`. Defaults to [`Compare::Fast`]. A
/// constant-time policy only protects a comparison if the blob holding the secret
/// is on either side of it; the policy of the left-hand blob is used.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub struct BlobOptions {
	pub scrub: Scrub,
	pub compare: Compare,
}

impl BlobOptions {
	/// Creates a new set of blob options.
	pub const fn new() -> Self {
		Self {
			scrub: Scrub::None,
			compare: Compare::Fast,
		}
	}

	/// Presets the options for secret data: memory is zeroed on release and
	/// comparisons run in constant time.
	#[inline]
	pub const fn secret() -> Self {
		Self {
			scrub: Scrub::Zeros,
			compare: Compare::ConstantTime,
		}
	}

	/// Returns the scrub policy.
	#[inline]
	pub const fn scrub(&self) -> Scrub { self.scrub }

	/// Returns the comparison policy.
	#[inline]
	pub const fn compare(&self) -> Compare { self.compare }

	/// Sets the scrub policy.
	#[inline]
	pub fn set_scrub(&mut self, value: Scrub) {
		self.scrub = value;
	}

	/// Sets the comparison policy.
	#[inline]
	pub fn set_compare(&mut self, value: Compare) {
		self.compare = value;
	}

	/// Sets the scrub policy.
	#[inline]
	pub const fn with_scrub(mut self, value: Scrub) -> Self {
		self.scrub = value;
		self
	}

	/// Sets the comparison policy.
	#[inline]
	pub const fn with_compare(mut self, value: Compare) -> Self {
		self.compare = value;
		self
	}

	/// Sets the scrub policy to [`Zeros`](Scrub::Zeros).
	#[inline]
	pub const fn zeroed_on_release(self) -> Self {
		self.with_scrub(Scrub::Zeros)
	}

	/// Sets the comparison policy to [`ConstantTime`](Compare::ConstantTime).
	#[inline]
	pub const fn constant_time(self) -> Self {
		self.with_compare(Compare::ConstantTime)
	}
}
