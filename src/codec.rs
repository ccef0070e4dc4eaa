//! Codec module: bidirectional text ↔ digit-string mapping
//!
//! Every byte of the input maps to exactly 3 decimal digits ("072" for 'H'),
//! so the digit string of an n-byte text is always 3n characters long.

use crate::PipelineError;

/// What to do with a decoded triple outside the byte range `[0, 255]`.
///
/// Triples run up to 999, so corrupted input can decode above 255. The
/// default policy clamps into range and keeps going; `Reject` surfaces
/// the triple as a format error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampPolicy {
    #[default]
    Clamp,
    Reject,
}

/// Encode text as a digit string, 3 zero-padded decimal digits per byte.
pub fn encode_text(text: &str) -> String {
    let mut digits = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        digits.push_str(&format!("{:03}", byte));
    }
    digits
}

/// Decode a digit string back to text with the default clamping policy.
pub fn decode_digits(digits: &str) -> Result<String, PipelineError> {
    decode_digits_with(digits, ClampPolicy::Clamp)
}

/// Decode a digit string back to text, 3 digits at a time.
///
/// A trailing fragment shorter than 3 characters is dropped. Non-numeric
/// triples are a format error; out-of-range triples follow `policy`.
pub fn decode_digits_with(digits: &str, policy: ClampPolicy) -> Result<String, PipelineError> {
    let raw = digits.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len() / 3);

    for triple in raw.chunks_exact(3) {
        let text = std::str::from_utf8(triple)
            .map_err(|_| PipelineError::Format(String::from_utf8_lossy(triple).into_owned()))?;
        let code: u32 = text
            .parse()
            .map_err(|_| PipelineError::Format(text.to_string()))?;

        let byte = match policy {
            ClampPolicy::Clamp => code.min(255) as u8,
            ClampPolicy::Reject => u8::try_from(code)
                .map_err(|_| PipelineError::Format(text.to_string()))?,
        };
        bytes.push(byte);
    }

    // Encode-side bytes always form valid UTF-8; arbitrary digit input can
    // produce bytes that do not, and the recovery policy is lossy, not fatal.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
