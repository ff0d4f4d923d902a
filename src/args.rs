use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output
    Encrypt(EncryptArgs),

    /// Decrypt input to output
    Decrypt(CommonArgs),

    /// Run the fixed demonstration vector and print the results as hex
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Ascon variant.
    #[arg(
        short = 'v',
        long = "variant",
        value_enum,
        default_value_t = VariantArg::Ascon128a,
    )]
    pub variant: VariantArg,

    /// Input file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Key file path (16 raw bytes).
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// 16-byte nonce as a hex string. Must never be reused with the same key.
    #[arg(short = 'n', long = "nonce", value_name = "HEX")]
    pub nonce: String,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key")]
    pub gen_key: bool,

    /// Associated data, provided as hex string (optional)
    #[arg(long = "aad", value_name = "HEX")]
    pub aad: Option<String>,
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Ascon variant.
    #[arg(
        short = 'v',
        long = "variant",
        value_enum,
        default_value_t = VariantArg::Ascon128a,
    )]
    pub variant: VariantArg,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum VariantArg {
    #[value(name = "ascon128")]
    Ascon128,
    #[value(name = "ascon128a")]
    Ascon128a,
}

impl From<VariantArg> for ascon_aead::Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Ascon128 => ascon_aead::Variant::Standard,
            VariantArg::Ascon128a => ascon_aead::Variant::Accelerated,
        }
    }
}
