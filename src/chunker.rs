//! Chunker module: cut a digit string into fixed-maximum-width chunks
//!
//! Each chunk keeps both its parsed integer value and its literal digit
//! width, because parsing discards leading zeros ("007" parses to 7) and
//! `merge` must reproduce the original substring exactly.

use crate::PipelineError;
use serde::{Deserialize, Serialize};

/// One window of the digit string: the parsed value plus the number of
/// digit characters it originally occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub value: u64,
    pub width: usize,
}

impl Chunk {
    /// Render the value zero-padded back to its recorded width.
    pub fn render(&self) -> String {
        format!("{:0width$}", self.value, width = self.width)
    }
}

/// Split a digit string into non-overlapping windows of up to `max_width`
/// digits, left to right. Only the final window may be shorter.
pub fn split(digits: &str, max_width: usize) -> Result<Vec<Chunk>, PipelineError> {
    assert!(max_width >= 1, "chunk width must be at least 1");
    assert!(max_width <= 18, "chunk values must fit in u64");

    let raw = digits.as_bytes();
    let mut chunks = Vec::with_capacity(raw.len().div_ceil(max_width));

    for window in raw.chunks(max_width) {
        let text = std::str::from_utf8(window)
            .map_err(|_| PipelineError::Format(String::from_utf8_lossy(window).into_owned()))?;
        let value: u64 = text
            .parse()
            .map_err(|_| PipelineError::Format(text.to_string()))?;
        chunks.push(Chunk {
            value,
            width: text.len(),
        });
    }

    Ok(chunks)
}

/// Concatenate chunks back into the digit string they were split from.
pub fn merge(chunks: &[Chunk]) -> String {
    chunks.iter().map(Chunk::render).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_widths_and_values() {
        let chunks = split("072105", 9).unwrap();
        assert_eq!(chunks, vec![Chunk { value: 72105, width: 6 }]);

        let chunks = split("0721051011", 4).unwrap();
        assert_eq!(
            chunks,
            vec![
                Chunk { value: 721, width: 4 },
                Chunk { value: 510, width: 4 },
                Chunk { value: 11, width: 2 },
            ]
        );
    }

    #[test]
    fn test_split_empty() {
        assert!(split("", 9).unwrap().is_empty());
    }

    #[test]
    fn test_merge_restores_leading_zeros() {
        for k in [1, 2, 3, 5, 9] {
            let digits = "000072105000255";
            assert_eq!(merge(&split(digits, k).unwrap()), digits);
        }
    }

    #[test]
    fn test_split_rejects_non_digits() {
        assert!(matches!(
            split("07x105", 9),
            Err(PipelineError::Format(_))
        ));
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn test_split_zero_width_panics() {
        let _ = split("123", 0);
    }
}
