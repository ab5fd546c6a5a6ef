/*
 * head.rs
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

//! Request-head synthesis: header block in, HTTP/1.x request head out.

use bytes::BytesMut;

use crate::error::ReadError;
use crate::frame::{HeaderBlock, PSEUDO_METHOD, PSEUDO_PATH, PSEUDO_SCHEME, PSEUDO_VERSION};

fn is_reserved(name: &str) -> bool {
    name == PSEUDO_METHOD || name == PSEUDO_PATH || name == PSEUDO_SCHEME || name == PSEUDO_VERSION
}

/// Append the full request head for `block` to `out`: request line, one
/// header line per value in ascending name order (reserved pseudo-headers
/// skipped, NUL-separated values split into one line each), terminating
/// blank line. Fails with no partial output if `method`, `path` or
/// `version` is missing.
pub fn synthesize_request_head(block: &HeaderBlock, out: &mut BytesMut) -> Result<(), ReadError> {
    let missing = |name: &str| ReadError::MalformedHeaders(name.to_string());
    let method = block.get(PSEUDO_METHOD).ok_or_else(|| missing(PSEUDO_METHOD))?;
    let path = block.get(PSEUDO_PATH).ok_or_else(|| missing(PSEUDO_PATH))?;
    let version = block.get(PSEUDO_VERSION).ok_or_else(|| missing(PSEUDO_VERSION))?;

    out.extend_from_slice(method.as_bytes());
    out.extend_from_slice(b" ");
    out.extend_from_slice(path.as_bytes());
    out.extend_from_slice(b" ");
    out.extend_from_slice(version.as_bytes());
    out.extend_from_slice(b"\r\n");

    for (name, value) in block {
        if is_reserved(name) {
            continue;
        }
        for part in value.split('\0') {
            out.extend_from_slice(name.as_bytes());
            out.extend_from_slice(b": ");
            out.extend_from_slice(part.as_bytes());
            out.extend_from_slice(b"\r\n");
        }
    }
    out.extend_from_slice(b"\r\n");
    Ok(())
}
