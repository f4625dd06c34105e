use std::error::Error;
use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use rusty_pyramid::{decode, encode, key, CipherError};

/// Pyramid (Triangle) Cipher
#[derive(Parser)]
#[command(name = "rusty-pyramid")]
struct Args {
    /// Text to encode/decode. If omitted, prompts interactively.
    message: Option<String>,

    /// e=encode, d=decode
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Numeric key sequence (comma-separated), e.g. 2,1,3
    #[arg(short, long)]
    key: Option<String>,

    /// Generate a random key of N elements and exit
    #[arg(long, value_name = "N", conflicts_with_all = ["message", "mode", "key"])]
    gen_key: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    #[value(name = "e", alias = "encode")]
    Encode,
    #[value(name = "d", alias = "decode")]
    Decode,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if let Some(len) = args.gen_key {
        let key: Vec<String> = key::random_key(len).iter().map(i64::to_string).collect();
        println!("{}", key.join(","));
        return Ok(());
    }

    let (message, mode, key_str) = match (args.message, args.mode) {
        (Some(message), Some(mode)) => (message, mode, args.key.unwrap_or_default()),
        // Fallback interactif quand il manque le message ou le mode
        _ => {
            let message = prompt("Enter message: ")?;
            let mode_str = prompt("Encode or decode (e/d)? ")?;
            let key_str = prompt("Key (comma numbers) or blank for mono: ")?;
            let mode = match mode_str.trim().to_lowercase().as_str() {
                "e" => Mode::Encode,
                "d" => Mode::Decode,
                other => return Err(CipherError::UnknownMode(other.to_string()).into()),
            };
            (message, mode, key_str)
        }
    };

    // La clé est validée ici, avant de toucher au moteur
    let key = key::parse_key(&key_str)?;
    let output = match mode {
        Mode::Encode => encode(&message, key.as_deref()),
        Mode::Decode => decode(&message, key.as_deref()),
    };
    println!("{output}");
    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
