//! Fuzz target: `LineDecoder::feed` / `next_line`
//!
//! Pushes arbitrary byte sequences through the streaming line decoder and
//! asserts that it never panics, never yields a line longer than
//! `MAX_LINE_LEN` or containing a terminator, and behaves the same after a reset.
//!
//! cargo fuzz run fuzz_line_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use soilbridge::link::codec::{LineDecoder, MAX_LINE_LEN};

fn run(decoder: &mut LineDecoder, data: &[u8]) -> usize {
    let mut rest = data;
    let mut lines = 0;

    while !rest.is_empty() {
        let used = decoder.feed(rest);
        rest = &rest[used..];
        while let Some(line) = decoder.next_line() {
            assert!(line.len() <= MAX_LINE_LEN, "line exceeds MAX_LINE_LEN");
            assert!(!line.contains(&b'\n'), "terminator leaked into line");
            lines += 1;
        }
    }
    lines
}

fuzz_target!(|data: &[u8]| {
    let mut decoder = LineDecoder::new();
    let first = run(&mut decoder, data);

    decoder.reset();
    assert_eq!(decoder.buffered(), 0);
    assert_eq!(run(&mut decoder, data), first);
});
