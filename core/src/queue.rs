/*
 * queue.rs
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

//! Per-stream input frame queue: thread-safe FIFO with blocking and
//! non-blocking dequeue.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use crate::frame::Frame;

/// Outcome of a dequeue attempt.
#[derive(Debug)]
pub enum Dequeued {
    Frame(Frame),
    /// No frame queued right now; more may still arrive (non-blocking only).
    Empty,
    /// The final frame was already dequeued; the stream finished cleanly.
    Ended,
    /// The stream was reset before its final frame.
    Aborted,
}

#[derive(Debug, Default)]
struct Inner {
    frames: VecDeque<Frame>,
    final_posted: bool,
    final_dequeued: bool,
    aborted: bool,
}

/// FIFO of one stream's input frames, shared between the producer context
/// that posts decoded frames and the single consumer that dequeues them.
/// Unbounded; backpressure belongs to the protocol flow-control layer above.
#[derive(Debug, Default)]
pub struct FrameQueue {
    inner: Mutex<Inner>,
    available: Condvar,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a frame in arrival order and wake any blocked dequeuer.
    /// Returns false (dropping the frame) if the queue is aborted or a
    /// stream-final frame was already posted.
    pub fn post(&self, frame: Frame) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.aborted || inner.final_posted {
            log::warn!(
                "dropping frame posted after {}",
                if inner.aborted { "abort" } else { "final frame" }
            );
            return false;
        }
        if frame.ends_stream() {
            inner.final_posted = true;
        }
        inner.frames.push_back(frame);
        self.available.notify_all();
        true
    }

    /// Non-blocking dequeue.
    pub fn try_pop(&self) -> Dequeued {
        let mut inner = self.inner.lock().unwrap();
        Self::pop_locked(&mut inner)
    }

    /// Blocking dequeue: waits while the queue is empty and the stream has
    /// neither ended nor been aborted. Never blocks after the final frame
    /// has been dequeued.
    pub fn pop_blocking(&self) -> Dequeued {
        let mut inner = self.inner.lock().unwrap();
        loop {
            match Self::pop_locked(&mut inner) {
                Dequeued::Empty => {
                    inner = self.available.wait(inner).unwrap();
                }
                outcome => return outcome,
            }
        }
    }

    fn pop_locked(inner: &mut Inner) -> Dequeued {
        if let Some(frame) = inner.frames.pop_front() {
            if frame.ends_stream() {
                inner.final_dequeued = true;
            }
            return Dequeued::Frame(frame);
        }
        // A clean end observed before an abort stays a clean end.
        if inner.final_dequeued {
            Dequeued::Ended
        } else if inner.aborted {
            Dequeued::Aborted
        } else {
            Dequeued::Empty
        }
    }

    /// Abnormal termination: drop queued frames and wake all blocked
    /// dequeuers, which will observe `Dequeued::Aborted`.
    pub fn abort(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.aborted = true;
        inner.frames.clear();
        self.available.notify_all();
    }

    pub fn is_aborted(&self) -> bool {
        self.inner.lock().unwrap().aborted
    }
}
