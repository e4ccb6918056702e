use std::process::ExitCode;

use clap::{Parser, Subcommand};
use emv_tlv::parser::DEFAULT_MAX_DEPTH;
use emv_tlv::ParseOptions;
use tracing_subscriber::EnvFilter;

mod commands;
mod formatters;

use commands::encode::EncodeValue;
use formatters::FormatMode;

#[derive(Parser)]
#[command(name = "emv-decode")]
#[command(about = "EMV Decoder - Decode BER-TLV data and EMV bit fields")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse concatenated BER-TLV objects and print them as a tree
    Tlv {
        /// TLV data as hex
        hex: String,

        /// Output format mode
        #[arg(short, long, value_enum, default_value_t = FormatMode::Human)]
        format: FormatMode,

        /// Keep constructed values as raw bytes instead of decomposing them
        #[arg(long)]
        primitive: bool,

        /// Deepest constructed-tag nesting accepted
        #[arg(long, env = "EMV_TLV_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// List every bit of a flag field such as TVR or AIP
    Bits {
        /// Field value as hex
        hex: String,

        /// Number given to the first byte
        #[arg(long, default_value_t = 1)]
        first_byte: usize,
    },

    /// Print the labels of the set bits in a flag field
    Label {
        /// Field value as hex
        hex: String,
    },

    /// Encode a primitive TLV object
    Encode {
        /// Tag as hex, e.g. 9F02
        #[arg(long)]
        tag: String,

        /// Value as hex
        #[arg(long, conflicts_with = "byte", required_unless_present = "byte")]
        value: Option<String>,

        /// Single byte value (0-255)
        #[arg(long)]
        byte: Option<u32>,
    },
}

fn main() -> ExitCode {
    // Set RUST_LOG=debug for parser decisions, RUST_LOG=trace for every object
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = match &args.command {
        Command::Tlv {
            hex,
            format,
            primitive,
            max_depth,
        } => {
            let options = ParseOptions::default()
                .parse_constructed(!primitive)
                .max_depth(*max_depth);
            commands::tlv::cmd_tlv(hex, options, *format)
        }
        Command::Bits { hex, first_byte } => commands::bits::cmd_bits(hex, *first_byte),
        Command::Label { hex } => commands::bits::cmd_label(hex),
        Command::Encode { tag, value, byte } => {
            let value = match (value, byte) {
                (Some(hex), _) => EncodeValue::Hex(hex),
                (None, Some(byte)) => EncodeValue::Byte(*byte),
                (None, None) => {
                    eprintln!("Either --value or --byte is required");
                    return ExitCode::FAILURE;
                }
            };
            commands::encode::cmd_encode(tag, value)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Failed to decode: {}", err);
            ExitCode::FAILURE
        }
    }
}
