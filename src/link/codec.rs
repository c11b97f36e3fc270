//! Newline line codec.
//!
//! Wire format, both directions:
//! ```text
//! ┌──────────────────────────┬────┐
//! │ ASCII text (no '\n')     │ \n │
//! └──────────────────────────┴────┘
//! ```
//!
//! The decoder accumulates incoming bytes and hands out complete lines one
//! at a time.  This handles partial reads gracefully — a single
//! `Transport::read` call may return part of a line, or several lines
//! concatenated; whatever follows the first terminator stays buffered.

use core::fmt::{self, Write as _};

use heapless::{String, Vec};
use log::warn;

use crate::error::LinkError;

/// Longest inbound line delivered byte-for-byte, terminator excluded.
///
/// A longer line is delivered shortened: its first `MAX_LINE_LEN - 2`
/// bytes followed by its last two bytes before any trailing ASCII
/// whitespace.  Name prefix and `ON` suffix both survive, so the line
/// still classifies the same way.
pub const MAX_LINE_LEN: usize = 128;

/// Encode buffer capacity for outbound lines.
pub const MAX_OUT_LINE_LEN: usize = 64;

const TERMINATOR: u8 = b'\n';

/// Bytes kept from the end of an overlong line.
const TAIL_LEN: usize = 2;

/// Bytes kept from the start of an overlong line.
const HEAD_LEN: usize = MAX_LINE_LEN - TAIL_LEN;

/// Receive buffer: queued complete lines, plus room for one full-length
/// line and its terminator behind them.
const BUF_CAP: usize = 2 * MAX_LINE_LEN + 1;

/// One complete inbound line, terminator removed.
pub type LineBuf = Vec<u8, MAX_LINE_LEN>;

/// Rolling record of the last bytes of an overlong line, trailing
/// whitespace held back until something follows it.
#[derive(Default)]
struct Tail {
    bytes: [u8; TAIL_LEN],
    len: usize,
    pending_ws: Option<u8>,
}

impl Tail {
    fn track(&mut self, byte: u8) {
        if byte.is_ascii_whitespace() {
            self.pending_ws = Some(byte);
            return;
        }
        if let Some(ws) = self.pending_ws.take() {
            self.push(ws);
        }
        self.push(byte);
    }

    fn push(&mut self, byte: u8) {
        if self.len < TAIL_LEN {
            self.bytes[self.len] = byte;
            self.len += 1;
        } else {
            self.bytes.copy_within(1.., 0);
            self.bytes[TAIL_LEN - 1] = byte;
        }
    }

    fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Streaming line decoder.
pub struct LineDecoder {
    buf: Vec<u8, BUF_CAP>,
    /// Length of the unterminated line at the end of `buf`.
    line_len: usize,
    /// Set while the current line is past `MAX_LINE_LEN`; `buf` then holds
    /// only its head.
    tail: Option<Tail>,
    truncated_lines: u32,
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDecoder {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            line_len: 0,
            tail: None,
            truncated_lines: 0,
        }
    }

    /// How many bytes the next [`feed`](Self::feed) call can take without
    /// refusing any.  `0` means complete lines must be drained first.
    pub fn accept_len(&self) -> usize {
        // One slot stays free for a terminator; finishing an overlong line
        // also appends its tail.
        let reserve = if self.tail.is_some() { TAIL_LEN + 1 } else { 1 };
        (BUF_CAP - reserve)
            .saturating_sub(self.buf.len())
            .min(MAX_LINE_LEN)
    }

    /// Feed bytes into the decoder and return how many were consumed.
    ///
    /// Consumption only stops early when the buffer is full of complete
    /// lines; feeding at most [`accept_len`](Self::accept_len) bytes always
    /// consumes everything.
    pub fn feed(&mut self, data: &[u8]) -> usize {
        let mut consumed = 0;

        for &byte in data {
            if self.tail.is_some() {
                if byte == TERMINATOR {
                    self.finish_overlong();
                } else if let Some(tail) = self.tail.as_mut() {
                    tail.track(byte);
                }
                consumed += 1;
                continue;
            }

            if byte == TERMINATOR {
                if self.buf.push(byte).is_err() {
                    break;
                }
                self.line_len = 0;
            } else if self.line_len == MAX_LINE_LEN {
                self.begin_overlong(byte);
            } else if self.buf.len() + 1 < BUF_CAP {
                // The last slot stays free for a terminator.
                let _ = self.buf.push(byte);
                self.line_len += 1;
            } else {
                break;
            }
            consumed += 1;
        }

        consumed
    }

    /// The current line just outgrew `MAX_LINE_LEN`: keep its head and
    /// start tracking its tail from the bytes past the head.
    fn begin_overlong(&mut self, byte: u8) {
        let cut = self.buf.len() - self.line_len + HEAD_LEN;
        let mut tail = Tail::default();
        for &b in &self.buf[cut..] {
            tail.track(b);
        }
        tail.track(byte);

        self.buf.truncate(cut);
        self.line_len = HEAD_LEN;
        self.tail = Some(tail);
    }

    fn finish_overlong(&mut self) {
        if let Some(tail) = self.tail.take() {
            // Head and tail together are MAX_LINE_LEN at most, so the
            // terminator still fits.
            let _ = self.buf.extend_from_slice(tail.as_slice());
            let _ = self.buf.push(TERMINATOR);
        }
        self.line_len = 0;
        self.truncated_lines = self.truncated_lines.saturating_add(1);
        warn!("link: line exceeds {} bytes, middle dropped", MAX_LINE_LEN);
    }

    /// Take the oldest complete line, if any.
    pub fn next_line(&mut self) -> Option<LineBuf> {
        let end = self.buf.iter().position(|&b| b == TERMINATOR)?;
        let line = Vec::from_slice(&self.buf[..end]).ok()?;

        let rest = end + 1;
        let remaining = self.buf.len() - rest;
        self.buf.copy_within(rest.., 0);
        self.buf.truncate(remaining);

        Some(line)
    }

    /// Whether a complete line is waiting.
    pub fn has_line(&self) -> bool {
        self.buf.contains(&TERMINATOR)
    }

    /// Bytes currently buffered (complete and partial lines).
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Overlong lines shortened since construction.
    pub fn truncated_lines(&self) -> u32 {
        self.truncated_lines
    }

    /// Reset decoder state (e.g. after a link re-open).
    pub fn reset(&mut self) {
        self.buf.clear();
        self.line_len = 0;
        self.tail = None;
    }
}

/// Render `item` followed by `\n` into a fixed-capacity string.
pub fn encode_line(item: &impl fmt::Display) -> Result<String<MAX_OUT_LINE_LEN>, LinkError> {
    let mut out = String::new();
    write!(out, "{}", item).map_err(|_| LinkError::LineTooLong)?;
    out.push(TERMINATOR as char)
        .map_err(|_| LinkError::LineTooLong)?;
    Ok(out)
}
