// Cadenza
// Copyright (c) 2026 The Project Cadenza Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `buf` module converts whole buffers of audio between the planar floating-point
//! representation and the interleaved fixed-point wire representation.
//!
//! A planar buffer is any slice of per-channel `f64` buffers; the channel count is the length of
//! the slice. An interleaved buffer is a raw byte buffer holding frames of one fixed-point sample
//! per channel, with the channel varying fastest within a frame and the frame varying slowest
//! across the buffer. Planar offsets and lengths are expressed in frames (samples per channel);
//! interleaved offsets are expressed in bytes.
//!
//! Every operation checks its preconditions before writing: a conversion either completes its full
//! range or fails leaving the destination untouched.

use crate::conv::{Expand, Quantize};
use crate::endian::{needs_swap, Endianness};
use crate::errors::{buffer_too_small_error, invalid_channel_count_error, Result};
use crate::sample::{Sample, SampleFormat};

/// `PcmSpec` describes the sample encoding and channel count of an interleaved PCM byte stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PcmSpec {
    /// The fixed-point encoding of one sample.
    pub format: SampleFormat,
    /// The byte order of one sample. Accepted, but meaningless, for single-byte formats.
    pub endian: Endianness,
    /// The number of channels interleaved in one frame.
    pub n_channels: usize,
}

impl PcmSpec {
    pub fn new(format: SampleFormat, endian: Endianness, n_channels: usize) -> Self {
        PcmSpec { format, endian, n_channels }
    }

    /// Gets the number of bytes one frame occupies on the wire.
    pub fn frame_width(&self) -> usize {
        self.n_channels * self.format.width()
    }

    /// Gets the number of bytes `n_frames` frames occupy on the wire.
    pub fn byte_len(&self, n_frames: usize) -> usize {
        n_frames * self.frame_width()
    }
}

/// Converts planar floating-point audio into interleaved fixed-point PCM.
///
/// Reads `n_frames` samples from each channel of `src` starting at frame `src_offset`, quantizes
/// each sample per `spec.format`, byte-swaps it if `spec.endian` differs from the host byte order,
/// and writes it into `dst` starting at byte `dst_offset`. The sample of frame `i`, channel `c`
/// lands at byte `dst_offset + (i * n_channels + c) * width`.
///
/// Returns the number of bytes written. A zero-channel conversion writes nothing and returns 0.
///
/// # Errors
///
/// Returns [`InvalidChannelCount`](crate::errors::Error::InvalidChannelCount) if `src` does not
/// have `spec.n_channels` channels, and
/// [`BufferTooSmall`](crate::errors::Error::BufferTooSmall) if any source channel or the
/// destination does not cover the requested range. On error nothing has been written.
pub fn float_to_fixed<P: AsRef<[f64]>>(
    src: &[P],
    src_offset: usize,
    dst: &mut [u8],
    dst_offset: usize,
    n_frames: usize,
    spec: PcmSpec,
) -> Result<usize> {
    if src.len() != spec.n_channels {
        return invalid_channel_count_error("planar source channel count does not match the spec");
    }

    if spec.n_channels == 0 {
        return Ok(0);
    }

    for chan in src {
        if chan.as_ref().len() < src_offset + n_frames {
            return buffer_too_small_error("planar source does not cover the requested frames");
        }
    }

    if dst.len() < dst_offset + spec.byte_len(n_frames) {
        return buffer_too_small_error("interleaved destination buffer too short");
    }

    let swap = needs_swap(spec.endian, Endianness::native());

    match spec.format {
        SampleFormat::U8 => pack::<u8, P>(src, src_offset, dst, dst_offset, n_frames, swap),
        SampleFormat::S16 => pack::<i16, P>(src, src_offset, dst, dst_offset, n_frames, swap),
    }

    Ok(spec.byte_len(n_frames))
}

/// Converts interleaved fixed-point PCM into planar floating-point audio.
///
/// The mirror image of [`float_to_fixed`]: reads `n_frames` frames of interleaved samples from
/// `src` starting at byte `src_offset`, byte-swaps each sample if `spec.endian` differs from the
/// host byte order, expands it to a normalized `f64`, and writes it into
/// `dst[c][dst_offset + i]`.
///
/// A zero-channel conversion is a no-op.
///
/// # Errors
///
/// Returns [`InvalidChannelCount`](crate::errors::Error::InvalidChannelCount) if `dst` does not
/// have `spec.n_channels` channels, and
/// [`BufferTooSmall`](crate::errors::Error::BufferTooSmall) if the source or any destination
/// channel does not cover the requested range. On error nothing has been written.
pub fn fixed_to_float<P: AsMut<[f64]>>(
    src: &[u8],
    src_offset: usize,
    dst: &mut [P],
    dst_offset: usize,
    n_frames: usize,
    spec: PcmSpec,
) -> Result<()> {
    if dst.len() != spec.n_channels {
        return invalid_channel_count_error(
            "planar destination channel count does not match the spec",
        );
    }

    if spec.n_channels == 0 {
        return Ok(());
    }

    if src.len() < src_offset + spec.byte_len(n_frames) {
        return buffer_too_small_error("interleaved source buffer too short");
    }

    for chan in dst.iter_mut() {
        if chan.as_mut().len() < dst_offset + n_frames {
            return buffer_too_small_error("planar destination does not cover the requested frames");
        }
    }

    let swap = needs_swap(spec.endian, Endianness::native());

    match spec.format {
        SampleFormat::U8 => unpack::<u8, P>(src, src_offset, dst, dst_offset, n_frames, swap),
        SampleFormat::S16 => unpack::<i16, P>(src, src_offset, dst, dst_offset, n_frames, swap),
    }

    Ok(())
}

/// Copies `len` samples from one planar channel buffer to another.
///
/// A raw element-wise copy: no clipping and no format conversion. The borrow rules already forbid
/// `src` and `dst` from aliasing, so overlapping copies cannot occur.
///
/// # Errors
///
/// Returns [`BufferTooSmall`](crate::errors::Error::BufferTooSmall) if either buffer does not
/// cover the requested range. On error nothing has been written.
pub fn planar_blit(
    src: &[f64],
    src_offset: usize,
    dst: &mut [f64],
    dst_offset: usize,
    len: usize,
) -> Result<()> {
    if src.len() < src_offset + len {
        return buffer_too_small_error("blit source does not cover the requested samples");
    }

    if dst.len() < dst_offset + len {
        return buffer_too_small_error("blit destination does not cover the requested samples");
    }

    dst[dst_offset..dst_offset + len].copy_from_slice(&src[src_offset..src_offset + len]);

    Ok(())
}

fn pack<S: Sample + Quantize, P: AsRef<[f64]>>(
    src: &[P],
    src_offset: usize,
    dst: &mut [u8],
    dst_offset: usize,
    n_frames: usize,
    swap: bool,
) {
    let n_channels = src.len();

    for (c, chan) in src.iter().enumerate() {
        let chan = &chan.as_ref()[src_offset..src_offset + n_frames];

        for (i, &s) in chan.iter().enumerate() {
            let mut sample = S::quantize(s);

            if swap {
                sample = sample.swapped();
            }

            let pos = dst_offset + (i * n_channels + c) * S::WIDTH;
            sample.store_ne(&mut dst[pos..pos + S::WIDTH]);
        }
    }
}

fn unpack<S: Sample + Expand, P: AsMut<[f64]>>(
    src: &[u8],
    src_offset: usize,
    dst: &mut [P],
    dst_offset: usize,
    n_frames: usize,
    swap: bool,
) {
    let n_channels = dst.len();

    for (c, chan) in dst.iter_mut().enumerate() {
        let chan = &mut chan.as_mut()[dst_offset..dst_offset + n_frames];

        for (i, s) in chan.iter_mut().enumerate() {
            let pos = src_offset + (i * n_channels + c) * S::WIDTH;
            let mut sample = S::load_ne(&src[pos..pos + S::WIDTH]);

            if swap {
                sample = sample.swapped();
            }

            *s = sample.expand();
        }
    }
}
