/*
 * error.rs
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

//! Read errors.

use std::fmt;

/// Fatal stream errors surfaced by a read call. Both variants are sticky:
/// every subsequent read on the same reader returns the same error.
///
/// "Would block" is not an error; see
/// [`ReadStatus::WouldBlock`](crate::ReadStatus).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The header block is missing a required pseudo-header (named in the
    /// payload), so no request head can be synthesized.
    MalformedHeaders(String),
    /// The stream was reset before its final frame arrived. Distinct from a
    /// clean end of stream.
    Aborted,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::MalformedHeaders(name) => {
                write!(f, "malformed headers: missing pseudo-header {}", name)
            }
            ReadError::Aborted => write!(f, "stream aborted before final frame"),
        }
    }
}

impl std::error::Error for ReadError {}
