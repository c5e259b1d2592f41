// Cadenza
// Copyright (c) 2026 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `endian` module resolves the byte order of the wire against the byte order of the host.

/// An enumeration of byte orders.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endianness {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl Endianness {
    /// Gets the byte order of the host.
    pub fn native() -> Endianness {
        if cfg!(target_endian = "big") {
            Endianness::Big
        }
        else {
            Endianness::Little
        }
    }
}

/// Returns true if a multi-byte sample of byte order `target` must have its bytes reversed to be
/// read or written correctly by a host of byte order `host`.
#[inline]
pub fn needs_swap(target: Endianness, host: Endianness) -> bool {
    target != host
}
