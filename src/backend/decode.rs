//! Incremental UTF-8 decoding for streamed response bodies.
//!
//! Chunk boundaries land anywhere, including in the middle of a multi-byte
//! character. The decoder holds the incomplete trailing sequence back until
//! the rest arrives, so a split character is emitted exactly once, fully
//! decoded. Invalid bytes decode to U+FFFD.

/// Streaming byte→text decoder.
///
/// Feed chunks through [`decode`](Self::decode) as they arrive, then call
/// [`finish`](Self::finish) once at end of stream to flush any dangling
/// incomplete sequence.
#[derive(Debug, Default)]
pub struct Utf8StreamDecoder {
    /// Incomplete trailing sequence from the previous chunk (at most 3 bytes).
    pending: Vec<u8>,
}

impl Utf8StreamDecoder {
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Decodes the next chunk, joining it with any bytes held back from the
    /// previous call. The result may be empty when the chunk only extends a
    /// still-incomplete sequence.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        if self.pending.is_empty() {
            return self.decode_bytes(chunk);
        }
        let mut joined = std::mem::take(&mut self.pending);
        joined.extend_from_slice(chunk);
        self.decode_bytes(&joined)
    }

    fn decode_bytes(&mut self, mut data: &[u8]) -> String {
        let mut out = String::with_capacity(data.len());
        loop {
            match std::str::from_utf8(data) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(err) => {
                    let (valid, rest) = data.split_at(err.valid_up_to());
                    out.push_str(std::str::from_utf8(valid).expect("validated prefix"));
                    match err.error_len() {
                        // Malformed sequence inside the chunk: substitute
                        // and keep going.
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            data = &rest[len..];
                        }
                        // Sequence cut off at the chunk end: hold it back
                        // for the next call.
                        None => {
                            self.pending = rest.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Flushes the decoder at end of stream. A held-back incomplete
    /// sequence can never complete, so it decodes to a single U+FFFD.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            self.pending.clear();
            String::from(char::REPLACEMENT_CHARACTER)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b"Hel"), "Hel");
        assert_eq!(decoder.decode(b"lo, "), "lo, ");
        assert_eq!(decoder.decode(b"world!"), "world!");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_two_byte_char_split_at_boundary() {
        // "é" = [0xC3, 0xA9]
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b"caf\xC3"), "caf");
        assert_eq!(decoder.decode(b"\xA9!"), "\u{e9}!");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_three_byte_char_split_both_ways() {
        // "€" = [0xE2, 0x82, 0xAC]
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b"\xE2"), "");
        assert_eq!(decoder.decode(b"\x82"), "");
        assert_eq!(decoder.decode(b"\xAC"), "\u{20ac}");

        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b"\xE2\x82"), "");
        assert_eq!(decoder.decode(b"\xACok"), "\u{20ac}ok");
    }

    #[test]
    fn test_four_byte_char_split_byte_by_byte() {
        // "🔥" = [0xF0, 0x9F, 0x94, 0xA5]
        let mut decoder = Utf8StreamDecoder::new();
        let fire = "🔥".as_bytes();
        let mut out = String::new();
        for &b in fire {
            out.push_str(&decoder.decode(&[b]));
        }
        assert_eq!(out, "🔥");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_split_char_never_emitted_malformed() {
        // No partial bytes of the split character may leak before the
        // sequence completes.
        let mut decoder = Utf8StreamDecoder::new();
        let first = decoder.decode(b"ab\xE2\x82");
        assert_eq!(first, "ab");
        assert!(!first.contains(char::REPLACEMENT_CHARACTER));
        assert_eq!(decoder.decode(b"\xACcd"), "\u{20ac}cd");
    }

    #[test]
    fn test_invalid_byte_becomes_replacement() {
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b"a\xFFb"), "a\u{fffd}b");
    }

    #[test]
    fn test_truncated_sequence_replaced_by_next_chunk_start() {
        // A lead byte followed by a non-continuation byte is malformed, not
        // a split: 0xC3 then 'x'.
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b"\xC3"), "");
        assert_eq!(decoder.decode(b"x"), "\u{fffd}x");
    }

    #[test]
    fn test_finish_flushes_dangling_sequence() {
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b"ok\xF0\x9F"), "ok");
        assert_eq!(decoder.finish(), "\u{fffd}");
        // finish() is idempotent once drained
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_empty_chunk_is_harmless() {
        let mut decoder = Utf8StreamDecoder::new();
        assert_eq!(decoder.decode(b""), "");
        assert_eq!(decoder.decode(b"\xC3"), "");
        assert_eq!(decoder.decode(b""), "");
        assert_eq!(decoder.decode(b"\xA9"), "\u{e9}");
    }
}
