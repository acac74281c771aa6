//! Tolerant decoding of export bytes into text.
//!
//! List-style exports arrive as UTF-8 or, when redirected from a Windows
//! shell, as UTF-16 with a byte-order mark. A BOM selects the encoding;
//! without one the input is read as UTF-8. Malformed sequences are skipped
//! and counted instead of failing the run.

use encoding_rs::{DecoderResult, Encoding, UTF_8};

/// Text decoded from an input buffer.
#[derive(Debug, Clone)]
pub struct DecodedText {
    /// Decoded text with malformed sequences removed.
    pub text: String,
    /// Encoding the bytes were decoded with.
    pub encoding: &'static Encoding,
    /// Number of malformed byte sequences that were skipped.
    pub malformed: usize,
}

impl DecodedText {
    /// Name of the encoding used (for example `UTF-8` or `UTF-16LE`).
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }
}

/// Decodes `bytes`, sniffing a byte-order mark and skipping malformed input.
pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut src = &bytes[bom_len..];
    let mut text = String::new();
    let mut malformed = 0usize;

    loop {
        if let Some(needed) = decoder.max_utf8_buffer_length_without_replacement(src.len()) {
            text.reserve(needed);
        }
        let (result, read) = decoder.decode_to_string_without_replacement(src, &mut text, true);
        src = &src[read..];
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => continue,
            DecoderResult::Malformed(_, _) => malformed += 1,
        }
    }

    DecodedText {
        text,
        encoding,
        malformed,
    }
}
