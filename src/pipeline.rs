//! Pipeline module: orchestration and reconstruction
//!
//! `Pipeline::lock` runs every forward stage and captures each intermediate
//! artifact so the caller can report them; `Pipeline::unlock` inverts the
//! stages. All functions here are pure — printing belongs to the binaries.

use crate::chunker::{self, Chunk};
use crate::cipher;
use crate::codec;
use crate::decompose::{self, Decomposition};
use crate::PipelineError;
use serde::{Deserialize, Serialize};

/// Default maximum digits per chunk.
pub const DEFAULT_CHUNK_WIDTH: usize = 9;

/// Whether the reconstructor may substitute the recorded chunk value when a
/// rebuilt triple disagrees with it.
///
/// `Correct` is the self-healing default; `Strict` trusts the cipher round
/// trip alone, so a decomposition or cipher bug becomes visible in the
/// output instead of being papered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrectionPolicy {
    #[default]
    Correct,
    Strict,
}

/// Everything the forward pass produces. The shift list is the key
/// material: ciphertext alone cannot be decrypted without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locked {
    pub digits: String,
    pub chunks: Vec<Chunk>,
    pub decompositions: Vec<Decomposition>,
    pub sequence: Vec<String>,
    pub ciphertext: String,
    pub shifts: Vec<i64>,
}

/// Result of the reverse pass: the rebuilt text, the decrypted number
/// strings, and the chunk indices where the consistency guard fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rebuilt {
    pub text: String,
    pub decrypted: Vec<String>,
    pub corrections: Vec<usize>,
}

#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    chunk_width: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_WIDTH)
    }
}

impl Pipeline {
    pub fn new(chunk_width: usize) -> Self {
        assert!(chunk_width >= 1, "chunk width must be at least 1");
        assert!(chunk_width <= 18, "chunk values must fit in u64");
        Self { chunk_width }
    }

    /// Run the forward pipeline: encode, split, decompose, flatten, encrypt.
    pub fn lock(&self, text: &str) -> Result<Locked, PipelineError> {
        let digits = codec::encode_text(text);
        let chunks = chunker::split(&digits, self.chunk_width)?;
        let decompositions: Vec<Decomposition> = chunks
            .iter()
            .map(|chunk| decompose::decompose(chunk.value))
            .collect();
        let sequence = cipher::flatten(&decompositions);
        let (ciphertext, shifts) = cipher::encrypt_sequence(&sequence)?;

        Ok(Locked {
            digits,
            chunks,
            decompositions,
            sequence,
            ciphertext,
            shifts,
        })
    }

    /// Run the reverse pipeline: decrypt, regroup, recompose, repad, decode.
    pub fn unlock(&self, locked: &Locked, policy: CorrectionPolicy) -> Result<Rebuilt, PipelineError> {
        let decrypted = cipher::decrypt_ascii(&locked.ciphertext, &locked.shifts)?;
        rebuild(&decrypted, &locked.chunks, policy)
    }
}

/// Rebuild the original text from decrypted number strings.
///
/// Numbers regroup into `(base, exponent, remainder)` triples (an
/// incomplete trailing triple is dropped), each triple recomposes to a
/// chunk value, and each value is zero-padded back to its recorded width.
/// Under `CorrectionPolicy::Correct`, a triple that recomposes to the
/// wrong value (or overflows) is replaced by the recorded chunk value and
/// its index is reported in `corrections`.
pub fn rebuild(
    decrypted: &[String],
    chunks: &[Chunk],
    policy: CorrectionPolicy,
) -> Result<Rebuilt, PipelineError> {
    let mut digits = String::new();
    let mut corrections = Vec::new();

    for (index, triple) in decrypted.chunks_exact(3).enumerate() {
        let base = parse_u64(&triple[0])?;
        let exponent = parse_u64(&triple[1])?;
        let remainder = parse_u64(&triple[2])?;

        let rebuilt = u32::try_from(exponent).ok().and_then(|exp| {
            Decomposition {
                base,
                exponent: exp,
                remainder,
            }
            .recompose()
        });

        let recorded = chunks.get(index);
        let value = match (policy, rebuilt, recorded) {
            // consistency guard: favor the recorded chunk value
            (CorrectionPolicy::Correct, Some(v), Some(chunk)) if v != chunk.value => {
                corrections.push(index);
                chunk.value
            }
            (CorrectionPolicy::Correct, None, Some(chunk)) => {
                corrections.push(index);
                chunk.value
            }
            (_, Some(v), _) => v,
            (CorrectionPolicy::Correct, None, None) | (CorrectionPolicy::Strict, None, _) => {
                return Err(PipelineError::Overflow(index));
            }
        };

        match recorded {
            Some(chunk) => digits.push_str(&format!("{:0width$}", value, width = chunk.width)),
            None => digits.push_str(&value.to_string()),
        }
    }

    let text = codec::decode_digits(&digits)?;
    Ok(Rebuilt {
        text,
        decrypted: decrypted.to_vec(),
        corrections,
    })
}

fn parse_u64(entry: &str) -> Result<u64, PipelineError> {
    entry
        .parse()
        .map_err(|_| PipelineError::Format(entry.to_string()))
}
