/*
 * frame.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Passerella, a multiplexed-web-stream translation library.
 *
 * Passerella is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Passerella is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Passerella.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Frame model: flag and priority constants, header block, typed frames.

use bytes::Bytes;
use std::collections::BTreeMap;

/// Set on the frame that terminates its stream. Exactly one frame per stream
/// carries it.
pub const FLAG_END_STREAM: u8 = 0x1;

pub const PRIORITY_HIGHEST: u8 = 0;
pub const PRIORITY_LOWEST: u8 = 7;

// Reserved pseudo-header names. The first three are required for request-head
// synthesis; `scheme` is carried for routing by outer layers. None of them is
// emitted as a header line.
pub const PSEUDO_METHOD: &str = "method";
pub const PSEUDO_PATH: &str = "path";
pub const PSEUDO_SCHEME: &str = "scheme";
pub const PSEUDO_VERSION: &str = "version";

/// Decoded header mapping for one stream. Names are unique; iteration is in
/// ascending lexicographic name order, which fixes the synthesized header-line
/// order. A value may contain NUL bytes separating multiple values.
pub type HeaderBlock = BTreeMap<String, String>;

/// One input frame of a logical stream, as produced by the wire codec.
#[derive(Debug, Clone)]
pub enum Frame {
    Headers {
        end_stream: bool,
        block: HeaderBlock,
    },
    Data {
        end_stream: bool,
        payload: Bytes,
    },
}

impl Frame {
    /// True if this frame terminates its stream.
    pub fn ends_stream(&self) -> bool {
        match self {
            Frame::Headers { end_stream, .. } => *end_stream,
            Frame::Data { end_stream, .. } => *end_stream,
        }
    }
}
