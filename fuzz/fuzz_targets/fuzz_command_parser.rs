//! Fuzz target: `Command::parse`
//!
//! Any byte line must classify without panicking, and a recognised command
//! must agree with the trimmed line's prefix and `ON` suffix.
//!
//! cargo fuzz run fuzz_command_parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use soilbridge::app::commands::Command;

fuzz_target!(|data: &[u8]| {
    if let Some(cmd) = Command::parse(data) {
        let trimmed = data.trim_ascii();
        assert!(trimmed.starts_with(cmd.target.name().as_bytes()));
        assert_eq!(cmd.on, trimmed.ends_with(b"ON"));
    }
});
