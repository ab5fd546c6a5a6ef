/*
 * lib.rs
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

//! Translation core for one logical multiplexed stream: frames in, HTTP/1.x
//! request bytes out.
//!
//! A producer (the connection's frame demultiplexer) posts the stream's
//! headers frame and data frames into its [`Stream`]; a consumer drives a
//! [`RequestReader`] over that stream, reading the synthesized request head
//! and the body payloads under five read disciplines ([`ReadMode`]) in
//! blocking or non-blocking flavor. Delivered byte ranges and the terminal
//! end-of-stream marker go to a [`DeliverySink`].

mod error;
mod frame;
mod head;
mod queue;
mod reader;
mod sink;
mod stream;

pub use error::ReadError;
pub use frame::{
    Frame, HeaderBlock, FLAG_END_STREAM, PRIORITY_HIGHEST, PRIORITY_LOWEST, PSEUDO_METHOD,
    PSEUDO_PATH, PSEUDO_SCHEME, PSEUDO_VERSION,
};
pub use head::synthesize_request_head;
pub use queue::{Dequeued, FrameQueue};
pub use reader::{BlockMode, ReadMode, ReadStatus, RequestReader};
pub use sink::{CollectedRequest, DeliverySink};
pub use stream::Stream;
