//! Cipher module: per-symbol additive shift into printable ASCII
//!
//! Each decimal number in the flattened sequence becomes one character in
//! `[32, 126]`, chosen by adding a shift derived from the number itself.
//! The shift list is recorded alongside the ciphertext and is required to
//! decrypt; equal numbers always produce the same character and shift.

use crate::decompose::Decomposition;
use crate::PipelineError;

const PRINTABLE_LOW: i64 = 32;
const PRINTABLE_HIGH: i64 = 126;

/// Flatten decompositions into the sequence that gets encrypted:
/// `[base, exponent, remainder]` per decomposition, in order.
pub fn flatten(decompositions: &[Decomposition]) -> Vec<String> {
    let mut sequence = Vec::with_capacity(decompositions.len() * 3);
    for d in decompositions {
        sequence.push(d.base.to_string());
        sequence.push(d.exponent.to_string());
        sequence.push(d.remainder.to_string());
    }
    sequence
}

/// Encrypt one number into a printable character and the shift that maps
/// it back.
///
/// Small numbers get pushed up to the bottom of the printable range, numbers
/// already inside `[32, 126]` pass through unshifted, and anything above the
/// range gets pulled down to the top.
pub fn encrypt_number(n: i64) -> (char, i64) {
    let mut shift = PRINTABLE_LOW - n;
    if n >= PRINTABLE_LOW {
        shift = 0;
    }
    if n + shift > PRINTABLE_HIGH {
        shift = PRINTABLE_HIGH - n;
    }
    ((n + shift) as u8 as char, shift)
}

/// Encrypt a flattened sequence into a ciphertext string plus the parallel
/// shift list, one shift per character in the same order.
pub fn encrypt_sequence(sequence: &[String]) -> Result<(String, Vec<i64>), PipelineError> {
    let mut ciphertext = String::with_capacity(sequence.len());
    let mut shifts = Vec::with_capacity(sequence.len());

    for entry in sequence {
        let n: i64 = entry
            .parse()
            .map_err(|_| PipelineError::Format(entry.clone()))?;
        let (ch, shift) = encrypt_number(n);
        ciphertext.push(ch);
        shifts.push(shift);
    }

    Ok((ciphertext, shifts))
}

/// Invert the cipher: subtract each recorded shift from its character's
/// code point and render the result as a decimal string.
///
/// The shift list must be exactly as long as the ciphertext.
pub fn decrypt_ascii(ciphertext: &str, shifts: &[i64]) -> Result<Vec<String>, PipelineError> {
    let chars: Vec<char> = ciphertext.chars().collect();
    if chars.len() != shifts.len() {
        return Err(PipelineError::LengthMismatch {
            chars: chars.len(),
            shifts: shifts.len(),
        });
    }

    Ok(chars
        .iter()
        .zip(shifts)
        .map(|(&ch, &shift)| (ch as i64 - shift).to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;

    #[test]
    fn test_encrypt_stays_printable() {
        for n in [0, 1, 31, 32, 64, 126, 127, 500, 72105, 999_999_999] {
            let (ch, _) = encrypt_number(n);
            let code = ch as i64;
            assert!((32..=126).contains(&code), "n={n} escaped to {code}");
        }
    }

    #[test]
    fn test_encrypt_shift_branches() {
        // below the range: pushed up to 32
        assert_eq!(encrypt_number(2), (' ', 30));
        // inside the range: untouched
        assert_eq!(encrypt_number(65), ('A', 0));
        // above the range: pulled down to 126
        assert_eq!(encrypt_number(200), ('~', -74));
    }

    #[test]
    fn test_cipher_inverse() {
        let sequence: Vec<String> = [0, 5, 31, 32, 100, 126, 127, 72105]
            .iter()
            .map(|n| n.to_string())
            .collect();
        let (ciphertext, shifts) = encrypt_sequence(&sequence).unwrap();
        assert_eq!(ciphertext.chars().count(), shifts.len());
        assert_eq!(decrypt_ascii(&ciphertext, &shifts).unwrap(), sequence);
    }

    #[test]
    fn test_decrypt_length_mismatch_fails() {
        assert!(matches!(
            decrypt_ascii("AB", &[0]),
            Err(PipelineError::LengthMismatch { chars: 2, shifts: 1 })
        ));
    }

    #[test]
    fn test_encrypt_rejects_non_numeric() {
        let bad = vec!["12".to_string(), "x".to_string()];
        assert!(matches!(
            encrypt_sequence(&bad),
            Err(PipelineError::Format(_))
        ));
    }

    #[test]
    fn test_flatten_order() {
        let ds = [decompose(1), decompose(72105)];
        let seq = flatten(&ds);
        assert_eq!(seq.len(), 6);
        assert_eq!(seq[0], "1");
        assert_eq!(seq[1], "1");
        assert_eq!(seq[2], "0");
        // the second triple recomposes to the chunk value
        let (b, e, r): (u64, u32, u64) = (
            seq[3].parse().unwrap(),
            seq[4].parse().unwrap(),
            seq[5].parse().unwrap(),
        );
        assert_eq!(b.checked_pow(e).unwrap() + r, 72105);
    }
}
