/*
 * reader.rs
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

//! Buffered stream reader: pulls frames from a stream's queue on demand and
//! serves them as request bytes under five read disciplines.

use bytes::{Bytes, BytesMut};
use std::sync::Arc;

use crate::error::ReadError;
use crate::frame::Frame;
use crate::head::synthesize_request_head;
use crate::queue::Dequeued;
use crate::sink::DeliverySink;
use crate::stream::Stream;

/// Read discipline, tagged with its length parameter where one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Readiness probe: never blocks, never consumes, always succeeds with
    /// no sink effect.
    Init,
    /// Consume through the next `\n` inclusive.
    Line,
    /// Consume up to the given number of bytes; never waits to fill the
    /// exact amount once at least one byte is available.
    Bytes(usize),
    /// Expose up to the given number of bytes without consuming them.
    Peek(usize),
    /// Consume everything available (to stream end when blocking).
    Drain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMode {
    Blocking,
    Nonblocking,
}

/// Status of a read call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    Success,
    /// Non-blocking read found nothing ready. Retryable; no bytes were
    /// consumed or lost.
    WouldBlock,
    /// All bytes and the terminal marker have been delivered.
    EndOfStream,
}

/// Pull-based byte reader over one stream's input frames.
///
/// Owns the backlog of synthesized-but-undelivered bytes: the request head is
/// synthesized into it when the headers frame is absorbed, data payloads are
/// appended verbatim in frame order. Consuming reads split ranges off the
/// front; peeks copy the front without advancing, so a later consuming read
/// starts at the same position.
pub struct RequestReader {
    stream: Arc<Stream>,
    buffer: BytesMut,
    saw_headers: bool,
    /// The stream-final frame has been absorbed; no more pulls.
    end_of_stream: bool,
    /// The terminal marker has been handed to a sink.
    end_delivered: bool,
    failed: Option<ReadError>,
}

impl RequestReader {
    pub fn new(stream: Arc<Stream>) -> Self {
        Self {
            stream,
            buffer: BytesMut::new(),
            saw_headers: false,
            end_of_stream: false,
            end_delivered: false,
            failed: None,
        }
    }

    pub fn stream(&self) -> &Arc<Stream> {
        &self.stream
    }

    /// Serve one read call against the backlog, pulling more frames as the
    /// discipline and block mode allow. At most one data range is delivered
    /// to `sink`, plus the terminal marker once the stream is fully drained.
    ///
    /// Errors are sticky: after `MalformedHeaders` or `Aborted`, every
    /// subsequent call (except `Init`) returns the same error, with the
    /// backlog left exactly as it was before the failing pull.
    pub fn read(
        &mut self,
        mode: ReadMode,
        block: BlockMode,
        sink: &mut impl DeliverySink,
    ) -> Result<ReadStatus, ReadError> {
        if mode == ReadMode::Init {
            return Ok(ReadStatus::Success);
        }
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        if self.end_delivered {
            return Ok(ReadStatus::EndOfStream);
        }
        // A reset before the final frame is fatal; after a clean final frame
        // the buffered bytes stay readable and a late abort is ignored.
        if self.stream.is_aborted() && !self.end_of_stream {
            self.failed = Some(ReadError::Aborted);
            return Err(ReadError::Aborted);
        }
        let result = match mode {
            ReadMode::Init => Ok(ReadStatus::Success),
            ReadMode::Line => self.read_line(block, sink),
            ReadMode::Bytes(n) => self.read_bytes(n, block, sink),
            ReadMode::Peek(n) => self.read_peek(n, block, sink),
            ReadMode::Drain => self.read_drain(block, sink),
        };
        if let Err(err) = &result {
            self.failed = Some(err.clone());
        }
        result
    }

    /// Fold one frame into the backlog.
    fn absorb(&mut self, frame: Frame) -> Result<(), ReadError> {
        match frame {
            Frame::Headers { end_stream, block } => {
                if self.saw_headers {
                    log::warn!("dropping duplicate headers frame on stream {}", self.stream.id());
                } else {
                    // Synthesis validates before writing, so a failure leaves
                    // the backlog untouched.
                    synthesize_request_head(&block, &mut self.buffer)?;
                    self.saw_headers = true;
                }
                if end_stream {
                    self.end_of_stream = true;
                }
            }
            Frame::Data { end_stream, payload } => {
                if !self.saw_headers {
                    log::warn!("data frame before headers frame on stream {}", self.stream.id());
                }
                self.buffer.extend_from_slice(&payload);
                if end_stream {
                    self.end_of_stream = true;
                }
            }
        }
        Ok(())
    }

    /// Non-blocking pull of one frame. Ok(true) if a frame was absorbed.
    fn try_pull(&mut self) -> Result<bool, ReadError> {
        if self.end_of_stream {
            return Ok(false);
        }
        match self.stream.try_dequeue_frame() {
            Dequeued::Frame(frame) => {
                self.absorb(frame)?;
                Ok(true)
            }
            Dequeued::Empty => Ok(false),
            Dequeued::Ended => {
                self.end_of_stream = true;
                Ok(false)
            }
            Dequeued::Aborted => Err(ReadError::Aborted),
        }
    }

    /// Blocking pull of one frame. Ok(false) only at clean stream end.
    fn pull_blocking(&mut self) -> Result<bool, ReadError> {
        if self.end_of_stream {
            return Ok(false);
        }
        match self.stream.dequeue_frame() {
            Dequeued::Frame(frame) => {
                self.absorb(frame)?;
                Ok(true)
            }
            // pop_blocking never reports Empty.
            Dequeued::Empty => Ok(false),
            Dequeued::Ended => {
                self.end_of_stream = true;
                Ok(false)
            }
            Dequeued::Aborted => Err(ReadError::Aborted),
        }
    }

    /// Pull toward `wanted` backlog bytes. Blocking mode waits only while
    /// the backlog is empty; top-up pulls never suspend. Returns with the
    /// backlog possibly still short when the queue is momentarily empty.
    fn fill(&mut self, wanted: usize, block: BlockMode) -> Result<(), ReadError> {
        loop {
            if self.buffer.len() >= wanted || self.end_of_stream {
                return Ok(());
            }
            let may_block = block == BlockMode::Blocking && self.buffer.is_empty();
            let pulled = if may_block {
                self.pull_blocking()?
            } else {
                self.try_pull()?
            };
            if !pulled && !self.end_of_stream {
                return Ok(());
            }
        }
    }

    /// Deliver the terminal marker if every byte is out and the stream is
    /// done. The marker is issued at most once per reader.
    fn finish_if_drained(&mut self, sink: &mut impl DeliverySink) {
        if self.end_of_stream && self.buffer.is_empty() && !self.end_delivered {
            sink.end_of_stream();
            self.end_delivered = true;
        }
    }

    /// Shared tail for an empty backlog: clean end or nothing ready yet.
    fn empty_result(&mut self, sink: &mut impl DeliverySink) -> ReadStatus {
        if self.end_of_stream {
            self.finish_if_drained(sink);
            ReadStatus::EndOfStream
        } else {
            ReadStatus::WouldBlock
        }
    }

    fn read_line(
        &mut self,
        block: BlockMode,
        sink: &mut impl DeliverySink,
    ) -> Result<ReadStatus, ReadError> {
        loop {
            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                let line = self.buffer.split_to(pos + 1).freeze();
                sink.data_chunk(line);
                self.finish_if_drained(sink);
                return Ok(ReadStatus::Success);
            }
            if self.end_of_stream {
                break;
            }
            let pulled = match block {
                BlockMode::Blocking => self.pull_blocking()?,
                BlockMode::Nonblocking => self.try_pull()?,
            };
            if !pulled && !self.end_of_stream {
                // Nothing ready; a buffered partial line stays put.
                return Ok(ReadStatus::WouldBlock);
            }
        }
        // Stream over with no newline left. Deliver the remainder as-is;
        // the terminal marker follows on the next call.
        if self.buffer.is_empty() {
            return Ok(self.empty_result(sink));
        }
        let len = self.buffer.len();
        let rest = self.buffer.split_to(len).freeze();
        sink.data_chunk(rest);
        Ok(ReadStatus::Success)
    }

    fn read_bytes(
        &mut self,
        wanted: usize,
        block: BlockMode,
        sink: &mut impl DeliverySink,
    ) -> Result<ReadStatus, ReadError> {
        if wanted == 0 {
            return Ok(ReadStatus::Success);
        }
        self.fill(wanted, block)?;
        if self.buffer.is_empty() {
            return Ok(self.empty_result(sink));
        }
        let take = wanted.min(self.buffer.len());
        let chunk = self.buffer.split_to(take).freeze();
        sink.data_chunk(chunk);
        self.finish_if_drained(sink);
        Ok(ReadStatus::Success)
    }

    fn read_peek(
        &mut self,
        wanted: usize,
        block: BlockMode,
        sink: &mut impl DeliverySink,
    ) -> Result<ReadStatus, ReadError> {
        if wanted == 0 {
            return Ok(ReadStatus::Success);
        }
        self.fill(wanted, block)?;
        if self.buffer.is_empty() {
            return Ok(self.empty_result(sink));
        }
        let take = wanted.min(self.buffer.len());
        // Copied, not split: the consumption cursor does not move, so the
        // next consuming read re-delivers these bytes.
        let chunk = Bytes::copy_from_slice(&self.buffer[..take]);
        sink.data_chunk(chunk);
        Ok(ReadStatus::Success)
    }

    fn read_drain(
        &mut self,
        block: BlockMode,
        sink: &mut impl DeliverySink,
    ) -> Result<ReadStatus, ReadError> {
        loop {
            if self.end_of_stream {
                break;
            }
            let pulled = match block {
                BlockMode::Blocking => self.pull_blocking()?,
                BlockMode::Nonblocking => self.try_pull()?,
            };
            if !pulled && !self.end_of_stream {
                break;
            }
        }
        if self.buffer.is_empty() {
            return Ok(self.empty_result(sink));
        }
        let len = self.buffer.len();
        let all = self.buffer.split_to(len).freeze();
        sink.data_chunk(all);
        self.finish_if_drained(sink);
        Ok(ReadStatus::Success)
    }
}
