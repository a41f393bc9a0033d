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

use std::{fmt, mem, ptr};
use std::sync::atomic::{compiler_fence, Ordering};
use amplify_derive::Display;
use tracing::trace;
use crate::AllocError;

/// The disposal action run over a container's whole allocation right before it's
/// freed.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Hash)]
pub enum Scrub {
	/// Leave the memory as is.
	#[default]
	#[display("none")]
	None,
	/// Overwrite every byte with zero.
	#[display("zeros")]
	Zeros,
}

impl Scrub {
	/// Returns `true` if the policy is [`None`](Self::None).
	pub fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}

	/// Returns `true` if the policy is [`Zeros`](Self::Zeros).
	pub fn is_zeros(&self) -> bool {
		matches!(self, Self::Zeros)
	}

	/// Runs the policy over `data`.
	pub(crate) fn apply(self, data: &mut [u8]) {
		match self {
			Self::None => { }
			Self::Zeros => zero_fill(data)
		}
	}
}

/// Overwrites `data` with zeros, a word at a time over the aligned middle and a
/// byte at a time over the unaligned ends. The writes are volatile, so they can't
/// be elided as dead stores even though the memory is about to be freed.
pub(crate) fn zero_fill(data: &mut [u8]) {
	let (head, words, tail) = bytemuck::pod_align_to_mut::<u8, u64>(data);
	for byte in head.iter_mut().chain(tail) {
		// Safety: the pointer comes from a live mutable reference.
		unsafe { ptr::write_volatile(byte, 0) }
	}
	for word in words {
		// Safety: as above, and the word is aligned by pod_align_to_mut.
		unsafe { ptr::write_volatile(word, 0) }
	}
	compiler_fence(Ordering::SeqCst);
}

/// The sole owner of one byte allocation and its disposal policy. Containers are
/// never copied; blobs share them through an `Arc`, mutable blobs own them
/// outright. Disposal runs once, when the last owner drops the container.
pub(crate) struct Container {
	data: Box<[u8]>,
	scrub: Scrub,
}

impl Container {
	/// Creates an empty container, which owns no allocation.
	pub fn empty() -> Self {
		Self {
			data: Box::default(),
			scrub: Scrub::None,
		}
	}

	/// Allocates a zero-filled container of `size` bytes.
	pub fn zeroed(size: usize, scrub: Scrub) -> Self {
		Self {
			data: vec![0; size].into_boxed_slice(),
			scrub,
		}
	}

	/// Allocates a zero-filled container of `size` bytes, returning an error
	/// rather than aborting if the allocation fails.
	pub fn try_zeroed(size: usize, scrub: Scrub) -> Result<Self, AllocError> {
		let mut data = Vec::new();
		data.try_reserve_exact(size)
			.map_err(|_| AllocError { size })?;
		data.resize(size, 0);
		Ok(Self { data: data.into_boxed_slice(), scrub })
	}

	/// Allocates a container holding a copy of `src`.
	pub fn copy_from(src: &[u8], scrub: Scrub) -> Self {
		let mut container = Self::zeroed(src.len(), scrub);
		container.data.copy_from_slice(src);
		container
	}

	/// Allocates a container holding a copy of `src`, returning an error rather
	/// than aborting if the allocation fails.
	pub fn try_copy_from(src: &[u8], scrub: Scrub) -> Result<Self, AllocError> {
		let mut container = Self::try_zeroed(src.len(), scrub)?;
		container.data.copy_from_slice(src);
		Ok(container)
	}

	/// Takes ownership of `data`'s allocation.
	pub fn from_vec(data: Vec<u8>, scrub: Scrub) -> Self {
		Self { data: data.into_boxed_slice(), scrub }
	}

	#[inline]
	pub fn len(&self) -> usize { self.data.len() }
	#[inline]
	pub fn scrub(&self) -> Scrub { self.scrub }
	#[inline]
	pub fn as_slice(&self) -> &[u8] { &self.data }
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [u8] { &mut self.data }

	/// Runs the disposal policy over the allocation and detaches it, leaving the
	/// container empty. Called by `drop`; an empty container has nothing left to
	/// dispose of, so disposal cannot repeat.
	fn dispose(&mut self) -> Box<[u8]> {
		let mut data = mem::take(&mut self.data);
		if self.scrub.is_zeros() && !data.is_empty() {
			self.scrub.apply(&mut data);
			trace!(size = data.len(), "scrubbed container");
		}
		data
	}
}

impl Drop for Container {
	fn drop(&mut self) {
		drop(self.dispose())
	}
}

impl fmt::Debug for Container {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Container")
		 .field("len", &self.len())
		 .field("scrub", &self.scrub)
		 .finish_non_exhaustive()
	}
}
