mod args;

use args::{Cli, Commands};
use ascon_aead::{Cipher, Key, Nonce, Variant};
use clap::Parser;

use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] std::num::ParseIntError),

    #[error("malformed hex string: {0:?} (expected an even number of ASCII hex digits)")]
    MalformedHex(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Ascon(#[from] ascon_aead::Error),
}

fn main() -> ExitCode {
    match ascon_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn ascon_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            let input_path = enc.common.input; // move ownership
            let output_path = enc.common.output;
            let key_path = enc.common.key;
            let variant = Variant::from(enc.common.variant);

            let plaintext = fs::read(input_path)?;

            // read or generate key
            let key = if enc.gen_key {
                let rand_key = Key::rand_key()?;
                fs::write(key_path, rand_key.as_bytes())?;
                rand_key
            } else {
                Key::try_from_slice(&fs::read(key_path)?)?
            };

            let nonce = Nonce::try_from_slice(&parse_hex(&enc.nonce)?)?;
            let aad = match enc.aad {
                Some(aad_str) => parse_hex(&aad_str)?,
                None => Vec::new(),
            };

            let start = Instant::now();
            let sealed = Cipher::new(&key, variant).seal(&nonce, &aad, &plaintext)?;
            let duration = start.elapsed();

            fs::write(output_path, &sealed)?;
            println!(
                "Encrypted {} bytes with {variant} in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(common) => {
            let input_path = common.input; // move ownership
            let output_path = common.output;
            let key_path = common.key;
            let variant = Variant::from(common.variant);

            let message = fs::read(input_path)?;
            let key = Key::try_from_slice(&fs::read(key_path)?)?;

            let start = Instant::now();
            let (plaintext, aad) = Cipher::new(&key, variant).open(&message)?;
            let duration = start.elapsed();

            fs::write(output_path, &plaintext)?;

            if let Some(aad) = aad {
                println!("AAD = {}", to_hex(&aad));
            }

            println!(
                "Decrypted {} bytes with {variant} in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Demo(demo) => {
            let variant = Variant::from(demo.variant);
            let key = Key::from_bytes(DEMO_KEY);
            let nonce = Nonce::from_bytes(DEMO_NONCE);
            let cipher = Cipher::new(&key, variant);

            let (ciphertext, tag) = cipher.encrypt(&nonce, DEMO_AD, DEMO_PLAINTEXT);
            let plaintext = cipher.decrypt(&nonce, DEMO_AD, &ciphertext, &tag)?;

            println!("Variant:    {variant}");
            println!("Key:        {}", to_hex(key.as_bytes()));
            println!("Nonce:      {}", to_hex(nonce.as_bytes()));
            println!("AD:         {}", to_hex(DEMO_AD));
            println!("Plaintext:  {}", to_hex(DEMO_PLAINTEXT));
            println!("Ciphertext: {}", to_hex(&ciphertext));
            println!("Tag:        {}", to_hex(&tag));
            println!("Decrypted:  {}", to_hex(&plaintext));
            Ok(())
        }
    }
}

const DEMO_KEY: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];
const DEMO_NONCE: [u8; 16] = DEMO_KEY;
const DEMO_AD: &[u8] = b"ASCON";
const DEMO_PLAINTEXT: &[u8] = &[0x8b, 0x86, 0xd9, 0x32, 0x8b, 0x86, 0xd9, 0x32];

fn parse_hex(s: &str) -> Result<Vec<u8>, CliError> {
    let hex: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if !hex.is_ascii() || hex.len() % 2 == 1 {
        return Err(CliError::MalformedHex(hex));
    }

    let bytes = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()?;
    Ok(bytes)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
