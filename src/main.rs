use anyhow::{Context, Result};
use clap::Parser;
use powerlock::{CorrectionPolicy, Locked, Pipeline, Rebuilt};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// powerlock - obfuscate a line of text through numeric decomposition
///
/// Runs the full lock/unlock pipeline on one line of text and reports
/// every intermediate stage.
#[derive(Parser)]
#[command(name = "powerlock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to process; one line is read from stdin when omitted
    #[arg(long)]
    text: Option<String>,

    /// Maximum digits per chunk (1-18)
    #[arg(long, default_value_t = 9)]
    chunk_width: usize,

    /// Write the lock artifact (ciphertext, shifts, chunk table) as YAML
    #[arg(long)]
    out: Option<PathBuf>,

    /// Disable the consistency guard: trust the cipher round trip alone
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.chunk_width == 0 || cli.chunk_width > 18 {
        anyhow::bail!("chunk width must be between 1 and 18");
    }

    let text = match cli.text {
        Some(text) => text,
        None => read_input_line()?,
    };

    let pipeline = Pipeline::new(cli.chunk_width);
    let locked = pipeline.lock(&text)?;

    print_initial(&locked);
    print_decompositions(&locked);
    print_encryption(&locked);

    if let Some(path) = &cli.out {
        let yaml = serde_yaml::to_string(&locked).context("Failed to serialize lock artifact")?;
        fs::write(path, yaml)
            .with_context(|| format!("Failed to write lock artifact to {:?}", path))?;
        println!("Lock artifact written: {:?}", path);
    }

    let policy = if cli.strict {
        CorrectionPolicy::Strict
    } else {
        CorrectionPolicy::Correct
    };
    let rebuilt = pipeline.unlock(&locked, policy)?;
    print_final(&rebuilt, policy);

    Ok(())
}

fn read_input_line() -> Result<String> {
    print!("Enter text: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_initial(locked: &Locked) {
    println!(
        "Digit string ({} chars): {}",
        locked.digits.len(),
        locked.digits
    );
    let values: Vec<u64> = locked.chunks.iter().map(|c| c.value).collect();
    println!("Chunks: {:?}", values);
    println!();
    println!("Integer decompositions:");
}

fn print_decompositions(locked: &Locked) {
    for (i, d) in locked.decompositions.iter().enumerate() {
        println!(
            "Chunk {} ({}): {}^{} + {}",
            i + 1,
            locked.chunks[i].value,
            d.base,
            d.exponent,
            d.remainder
        );
        // independent recomposition, part of the decomposition contract
        let check = d.recompose().unwrap_or(0);
        println!("Check: {}^{} + {} = {}", d.base, d.exponent, d.remainder, check);
        println!();
    }
}

fn print_encryption(locked: &Locked) {
    println!("Generated sequence: {:?}", locked.sequence);
    println!("Encrypted text: {}", locked.ciphertext);
    println!("Shifts used: {:?}", locked.shifts);
}

fn print_final(rebuilt: &Rebuilt, policy: CorrectionPolicy) {
    println!();
    println!("Full decryption pass:");
    println!("Decrypted numbers: {:?}", rebuilt.decrypted);
    if policy == CorrectionPolicy::Correct {
        if rebuilt.corrections.is_empty() {
            println!("Consistency guard: no corrections needed");
        } else {
            println!("Consistency guard: corrected chunks {:?}", rebuilt.corrections);
        }
    }
    println!("Reconstructed text: {}", rebuilt.text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["powerlock"]);
        assert_eq!(cli.text, None);
        assert_eq!(cli.chunk_width, 9);
        assert_eq!(cli.out, None);
        assert!(!cli.strict);
    }

    #[test]
    fn test_cli_parses_text_and_width() {
        let cli = Cli::parse_from(["powerlock", "--text", "Hi", "--chunk-width", "4"]);
        assert_eq!(cli.text, Some("Hi".to_string()));
        assert_eq!(cli.chunk_width, 4);
    }

    #[test]
    fn test_cli_parses_out_and_strict() {
        let cli = Cli::parse_from(["powerlock", "--out", "/tmp/a.yaml", "--strict"]);
        assert_eq!(cli.out, Some(PathBuf::from("/tmp/a.yaml")));
        assert!(cli.strict);
    }
}
