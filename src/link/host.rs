//! Line-oriented host link over any [`Transport`].

use core::fmt;

use log::{debug, warn};

use super::codec::{LineBuf, LineDecoder, MAX_LINE_LEN, encode_line};
use super::transport::Transport;
use crate::error::LinkError;

/// Pairs a byte transport with a [`LineDecoder`].
pub struct HostLink<T: Transport> {
    transport: T,
    decoder: LineDecoder,
}

impl<T: Transport> HostLink<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            decoder: LineDecoder::new(),
        }
    }

    /// Non-blocking: pull whatever bytes are waiting and return at most one
    /// complete line.  A partial line stays buffered for a later poll.
    pub fn poll_line(&mut self) -> Option<LineBuf> {
        self.fill();
        self.decoder.next_line()
    }

    /// Write `item` as one `\n`-terminated line.
    pub fn send_line(&mut self, item: &impl fmt::Display) -> Result<(), LinkError> {
        let line = encode_line(item)?;

        let written = self.transport.write(line.as_bytes()).map_err(|e| {
            warn!("link: write failed: {:?}", e);
            LinkError::WriteFailed
        })?;
        if written != line.len() {
            warn!("link: short write ({}/{} bytes)", written, line.len());
            return Err(LinkError::WriteFailed);
        }

        self.transport.flush().map_err(|e| {
            warn!("link: flush failed: {:?}", e);
            LinkError::WriteFailed
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn decoder(&self) -> &LineDecoder {
        &self.decoder
    }

    fn fill(&mut self) {
        if !self.transport.available() {
            return;
        }
        let want = self.decoder.accept_len();
        if want == 0 {
            debug!("link: receive buffer holds complete lines, deferring read");
            return;
        }

        let mut chunk = [0u8; MAX_LINE_LEN];
        match self.transport.read(&mut chunk[..want]) {
            Ok(n) => {
                self.decoder.feed(&chunk[..n]);
            }
            Err(e) => warn!("link: read failed: {:?}", e),
        }
    }
}
