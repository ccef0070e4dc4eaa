//! End-to-end round-trip tests through the public API.

use powerlock::{decrypt_ascii, CorrectionPolicy, Pipeline};

#[test]
fn printable_ascii_round_trips() {
    let pipeline = Pipeline::default();
    let all_printable: String = (32u8..=126).map(|b| b as char).collect();

    for text in [
        "Hi",
        "Hello, World!",
        "powerlock",
        "  leading and trailing  ",
        all_printable.as_str(),
    ] {
        let locked = pipeline.lock(text).unwrap();
        let rebuilt = pipeline.unlock(&locked, CorrectionPolicy::Correct).unwrap();
        assert_eq!(rebuilt.text, text);

        // stronger form: the stages are lossless even with the guard off
        let strict = pipeline.unlock(&locked, CorrectionPolicy::Strict).unwrap();
        assert_eq!(strict.text, text);
        assert!(strict.corrections.is_empty());
    }
}

#[test]
fn hi_scenario_golden_values() {
    let pipeline = Pipeline::default();
    let locked = pipeline.lock("Hi").unwrap();

    assert_eq!(locked.digits, "072105");
    assert_eq!(locked.chunks.len(), 1);
    assert_eq!(locked.chunks[0].value, 72105);
    assert_eq!(locked.chunks[0].width, 6);

    let d = &locked.decompositions[0];
    assert_eq!(d.recompose(), Some(72105));

    assert_eq!(locked.sequence.len(), 3);
    assert_eq!(locked.ciphertext.chars().count(), 3);
    assert_eq!(locked.shifts.len(), 3);

    let decrypted = decrypt_ascii(&locked.ciphertext, &locked.shifts).unwrap();
    assert_eq!(decrypted, locked.sequence);
}

#[test]
fn empty_line_round_trips() {
    let pipeline = Pipeline::default();
    let locked = pipeline.lock("").unwrap();
    assert!(locked.ciphertext.is_empty());
    let rebuilt = pipeline.unlock(&locked, CorrectionPolicy::Correct).unwrap();
    assert_eq!(rebuilt.text, "");
}

#[test]
fn multibyte_text_round_trips_per_byte() {
    // non-ASCII text is handled byte-wise: 3 digits per UTF-8 byte
    let pipeline = Pipeline::default();
    let text = "héllo";
    let locked = pipeline.lock(text).unwrap();
    assert_eq!(locked.digits.len(), text.len() * 3);
    let rebuilt = pipeline.unlock(&locked, CorrectionPolicy::Strict).unwrap();
    assert_eq!(rebuilt.text, text);
}

#[test]
fn artifact_survives_yaml_round_trip() {
    let pipeline = Pipeline::default();
    let locked = pipeline.lock("key material travels with the ciphertext").unwrap();

    let yaml = serde_yaml::to_string(&locked).unwrap();
    let restored: powerlock::Locked = serde_yaml::from_str(&yaml).unwrap();

    let rebuilt = pipeline.unlock(&restored, CorrectionPolicy::Correct).unwrap();
    assert_eq!(rebuilt.text, "key material travels with the ciphertext");
}
