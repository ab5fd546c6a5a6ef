/*
 * sink.rs
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

//! Delivery sink: where translated byte ranges and the terminal marker go.

use bytes::{Bytes, BytesMut};

/// Receives the reader's output. Each successful read delivers at most one
/// contiguous byte range, and at stream end exactly one terminal marker,
/// strictly after all data ranges and never merged with one.
pub trait DeliverySink {
    /// One contiguous range of translated request bytes.
    fn data_chunk(&mut self, data: Bytes);
    /// Terminal marker: all of the stream's bytes have been delivered.
    fn end_of_stream(&mut self);
}

/// Sink that accumulates the whole translated request in memory.
#[derive(Debug, Default)]
pub struct CollectedRequest {
    data: BytesMut,
    ended: bool,
}

impl CollectedRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// True once the terminal marker has arrived.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Take the accumulated bytes, leaving the sink empty.
    pub fn take(&mut self) -> Bytes {
        self.data.split().freeze()
    }
}

impl DeliverySink for CollectedRequest {
    fn data_chunk(&mut self, data: Bytes) {
        self.data.extend_from_slice(&data);
    }

    fn end_of_stream(&mut self) {
        self.ended = true;
    }
}
