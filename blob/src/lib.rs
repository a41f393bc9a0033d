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

//! ## How it works
//!
//! Bytes live in *containers*: single heap allocations, each with a *scrub* policy
//! run over the whole allocation right before it's freed. With [`Scrub::Zeros`],
//! the memory is overwritten with zeros by volatile writes the optimizer can't
//! remove, so secrets don't linger in freed memory.
//!
//! ### Blobs
//!
//! A [`Blob`] is a read-only window onto a container. Containers are shared
//! between blobs by atomic reference counting: cloning a blob or taking a subset
//! of it copies no bytes, and the container is released once, when the last blob
//! using it is dropped, from whichever thread that happens on. Subset bounds are
//! clamped to the parent blob rather than rejected. Blobs are never modified in
//! place; [`Blob::replace`] rebinds a blob to a new container, leaving others that
//! shared the old one untouched.
//!
//! Blobs compare by value under a comparison policy chosen at construction:
//! [`Compare::Fast`] stops at the first difference, [`Compare::ConstantTime`]
//! reads every byte so its timing reveals nothing but the length.
//!
//! A [`MutableBlob`] is the only way to write bytes. It always allocates its own
//! container and can't be cloned; once written, it can be frozen into a `Blob`
//! and shared freely.
//!
//! ### Codecs
//!
//! Blobs convert to and from text with the [`Binary`], [`Hex`], [`Base58`],
//! [`Base62`], and [`Base64`] codecs, or pass through unchanged with [`Raw`].
//! Base58 and base62 read the bytes as one big-endian integer, so leading zero
//! bytes are carried as leading zero-digit symbols.

mod blob;
pub mod codec;
mod compare;
mod container;
mod error;
mod mutable;
mod options;

pub use blob::Blob;
pub use codec::{Base58, Base62, Base64, Binary, Codec, CodecKind, EncodeBytes, Hex, Raw};
pub use compare::*;
pub use container::Scrub;
pub use error::*;
pub use mutable::MutableBlob;
pub use options::BlobOptions;
