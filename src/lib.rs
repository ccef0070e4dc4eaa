//! powerlock: obfuscate a line of text through numeric decomposition
//!
//! A toy locker that runs text through a fully reversible pipeline:
//!
//! 1. **Codec**: each byte becomes exactly 3 decimal digits
//! 2. **Chunker**: the digit string is cut into fixed-maximum-width chunks
//! 3. **Decomposer**: each chunk is expressed as `base^exponent + remainder`
//! 4. **Cipher**: the flattened triples become printable characters via
//!    per-symbol additive shifts; the shift list is the key material
//!
//! Unlocking inverts every stage. This is an obfuscation demo, not
//! cryptography: the shifts are derived from the plaintext itself.

use thiserror::Error;

pub mod chunker;
pub mod cipher;
pub mod codec;
pub mod decompose;
pub mod pipeline;

pub use chunker::Chunk;
pub use cipher::{decrypt_ascii, encrypt_number, encrypt_sequence, flatten};
pub use decompose::Decomposition;
pub use pipeline::{CorrectionPolicy, Locked, Pipeline, Rebuilt};

/// Failures possible across the pipeline stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A string that was expected to be a decimal number was not.
    #[error("malformed decimal number: {0:?}")]
    Format(String),

    /// Ciphertext and shift list must have the same length to decrypt.
    #[error("ciphertext/shift length mismatch: {chars} chars vs {shifts} shifts")]
    LengthMismatch { chars: usize, shifts: usize },

    /// A rebuilt `base^exponent + remainder` overflowed 64 bits.
    #[error("recomposed value overflowed at chunk {0}")]
    Overflow(usize),
}
