//! Host link — newline-framed ASCII over a byte transport.
//!
//! ```text
//!  UART ──▶ Transport ──▶ LineDecoder ──▶ HostLink::poll_line ──▶ dispatcher
//!  UART ◀── Transport ◀── encode_line ◀── HostLink::send_line ◀── reporter
//! ```

pub mod codec;
pub mod host;
pub mod transport;
