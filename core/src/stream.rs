/*
 * stream.rs
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

//! One logical stream: id, priority hint, and its input frame queue.

use bytes::Bytes;

use crate::frame::{Frame, HeaderBlock, FLAG_END_STREAM};
use crate::queue::{Dequeued, FrameQueue};

/// One request/response exchange multiplexed over a shared transport.
/// Shared as `Arc<Stream>` between the producer context posting decoded
/// frames and the single consumer reading them back out.
#[derive(Debug)]
pub struct Stream {
    id: u32,
    priority: u8,
    input: FrameQueue,
}

impl Stream {
    pub fn new(id: u32, priority: u8) -> Self {
        Self {
            id,
            priority,
            input: FrameQueue::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Scheduling hint, passed through to outer schedulers; not interpreted
    /// by the translation core.
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Post the stream's headers frame. `FLAG_END_STREAM` in `flags` marks a
    /// bodyless stream. Returns false if the frame was dropped.
    pub fn post_header_frame(&self, flags: u8, block: HeaderBlock) -> bool {
        self.input.post(Frame::Headers {
            end_stream: flags & FLAG_END_STREAM != 0,
            block,
        })
    }

    /// Post a body data frame. `FLAG_END_STREAM` in `flags` marks the
    /// stream's final frame. Returns false if the frame was dropped.
    pub fn post_data_frame(&self, flags: u8, payload: Bytes) -> bool {
        self.input.post(Frame::Data {
            end_stream: flags & FLAG_END_STREAM != 0,
            payload,
        })
    }

    /// Non-blocking dequeue of the next input frame.
    pub fn try_dequeue_frame(&self) -> Dequeued {
        self.input.try_pop()
    }

    /// Blocking dequeue: suspends the caller until a frame arrives, the
    /// stream ends cleanly, or it is aborted.
    pub fn dequeue_frame(&self) -> Dequeued {
        self.input.pop_blocking()
    }

    /// Abnormal termination (reset): drops undelivered frames and wakes any
    /// blocked dequeue.
    pub fn abort(&self) {
        self.input.abort();
    }

    pub fn is_aborted(&self) -> bool {
        self.input.is_aborted()
    }
}
