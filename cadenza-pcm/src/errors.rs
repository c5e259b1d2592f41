// Cadenza
// Copyright (c) 2026 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type.

use std::error;
use std::fmt;
use std::result;

/// `Error` provides an enumeration of all possible errors reported by the converter.
///
/// Every error is raised before the destination buffer is touched, so a failed conversion never
/// leaves a partial write behind. All errors are recoverable by the caller choosing different
/// inputs.
#[derive(Debug)]
pub enum Error {
    /// A buffer does not cover the range requested for conversion.
    BufferTooSmall(&'static str),
    /// The channel count of a planar buffer disagrees with the channel count of the interleaved
    /// stream.
    InvalidChannelCount(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::BufferTooSmall(msg) => {
                write!(f, "buffer too small: {}", msg)
            }
            Error::InvalidChannelCount(msg) => {
                write!(f, "invalid channel count: {}", msg)
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

/// Convenience function to create a buffer too small error.
pub fn buffer_too_small_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::BufferTooSmall(desc))
}

/// Convenience function to create an invalid channel count error.
pub fn invalid_channel_count_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::InvalidChannelCount(desc))
}
