// SPDX-License-Identifier: Apache-2.0

use std::hint::black_box;
use std::mem;
use amplify_derive::Display;

const WORD: usize = mem::size_of::<u64>();

/// The byte equality policy a blob compares with.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Hash)]
pub enum Compare {
	/// Short-circuits on the first differing byte. For data that isn't secret.
	#[default]
	#[display("fast")]
	Fast,
	/// Runs in time dependent only on length. For secrets such as tokens and
	/// digests.
	#[display("constant-time")]
	ConstantTime,
}

/// The outcome of an explicit comparison.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
pub enum Comparison {
	#[display("equal")]
	Eq,
	#[display("not equal")]
	Ne,
}

impl Compare {
	/// Returns `true` if the policy is [`Fast`](Self::Fast).
	pub fn is_fast(&self) -> bool {
		matches!(self, Self::Fast)
	}

	/// Returns `true` if the policy is [`ConstantTime`](Self::ConstantTime).
	pub fn is_constant_time(&self) -> bool {
		matches!(self, Self::ConstantTime)
	}

	/// Returns `true` if `a` and `b` are not equal.
	#[inline]
	pub fn differs(self, a: &[u8], b: &[u8]) -> bool {
		match self {
			Self::Fast => fast_ne(a, b),
			Self::ConstantTime => constant_time_ne(a, b)
		}
	}

	/// Compares `a` and `b`.
	#[inline]
	pub fn compare(self, a: &[u8], b: &[u8]) -> Comparison {
		if self.differs(a, b) {
			Comparison::Ne
		} else {
			Comparison::Eq
		}
	}
}

impl Comparison {
	pub fn is_eq(&self) -> bool { matches!(self, Self::Eq) }
	pub fn is_ne(&self) -> bool { matches!(self, Self::Ne) }
}

/// Returns `true` if `a` and `b` are not equal, returning as soon as the lengths
/// or any byte differ.
#[inline]
pub fn fast_ne(a: &[u8], b: &[u8]) -> bool {
	a != b
}

/// Returns `true` if `a` and `b` are not equal. Differing lengths return early, as
/// length isn't considered secret. Otherwise both inputs are read in full, words
/// then the remaining tail bytes, with every difference folded into one
/// accumulator.
pub fn constant_time_ne(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return true
	}

	let mut a_words = a.chunks_exact(WORD);
	let mut b_words = b.chunks_exact(WORD);
	let mut acc = 0u64;
	for (a, b) in a_words.by_ref().zip(b_words.by_ref()) {
		acc |= bytemuck::pod_read_unaligned::<u64>(a) ^ bytemuck::pod_read_unaligned::<u64>(b);
	}

	for (a, b) in a_words.remainder().iter().zip(b_words.remainder()) {
		acc |= u64::from(a ^ b);
	}

	black_box(acc) != 0
}
