//! Standalone unlocker binary for powerlock
//!
//! Minimal binary that reads a YAML lock artifact (written by
//! `powerlock --out`) and prints the rebuilt text to stdout.
//!
//! Usage:
//!   unlock <artifact.yaml> [--strict]

use powerlock::pipeline::{rebuild, CorrectionPolicy, Locked};
use powerlock::cipher::decrypt_ascii;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: unlock <artifact.yaml> [--strict]");
        process::exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let strict = args.iter().any(|a| a == "--strict");

    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read lock artifact {:?}: {}", path, e))?;
    let locked: Locked =
        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse lock artifact: {}", e))?;

    let policy = if strict {
        CorrectionPolicy::Strict
    } else {
        CorrectionPolicy::Correct
    };

    let decrypted = decrypt_ascii(&locked.ciphertext, &locked.shifts)?;
    let rebuilt = rebuild(&decrypted, &locked.chunks, policy)?;

    if !rebuilt.corrections.is_empty() {
        eprintln!("note: consistency guard corrected chunks {:?}", rebuilt.corrections);
    }

    println!("{}", rebuilt.text);

    Ok(())
}
