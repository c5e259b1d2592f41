// Cadenza
// Copyright (c) 2026 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]
// The following lints are allowed in all Cadenza crates. Please see the workspace Cargo.toml for
// their justification.
#![allow(clippy::comparison_chain)]
#![allow(clippy::manual_range_contains)]

//! The `cadenza-pcm` crate converts audio between Cadenza's internal planar, normalized
//! floating-point representation and the interleaved, fixed-point PCM wire representation used for
//! playback, encoding, and file storage.
//!
//! The planar representation is one `f64` buffer per channel with samples normalized to the range
//! `[-1.0, 1.0]`. The wire representation is a byte stream of frames, one fixed-point sample per
//! channel per frame, in one of the formats enumerated by [`sample::SampleFormat`] and one of the
//! byte orders enumerated by [`endian::Endianness`].
//!
//! All buffers are owned by the caller. Every operation is a single-pass, stateless transform that
//! validates its preconditions before writing anything: a failed call leaves the destination
//! byte-for-byte unchanged.
//!
//! ```
//! use cadenza_pcm::buf::{float_to_fixed, PcmSpec};
//! use cadenza_pcm::endian::Endianness;
//! use cadenza_pcm::sample::SampleFormat;
//!
//! let planar = vec![vec![0.0f64; 4], vec![0.0f64; 4]];
//! let mut wire = vec![0u8; 2 * 4 * 2];
//!
//! let spec = PcmSpec::new(SampleFormat::S16, Endianness::Little, 2);
//! let written = float_to_fixed(&planar, 0, &mut wire, 0, 4, spec)?;
//!
//! assert_eq!(written, 16);
//! # Ok::<(), cadenza_pcm::errors::Error>(())
//! ```

pub mod buf;
pub mod conv;
pub mod endian;
pub mod errors;
pub mod sample;
