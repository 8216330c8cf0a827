//! huffpack CLI - Huffman-encode a file into raw packed bits.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use huffpack::{EncodeSummary, EncodedData, EncoderConfig, ForestKind, HuffmanEncoder};
use log::LevelFilter;

/// huffpack - canonical Huffman encoder
#[derive(Parser, Debug)]
#[command(name = "huffpack")]
#[command(author, version, about = "Canonical Huffman encoder", long_about = None)]
struct Cli {
    /// File to encode
    input: PathBuf,

    /// Where to write the packed bits
    output: PathBuf,

    /// JSON encoder configuration; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Forest used while building the tree
    #[arg(long, value_enum)]
    forest: Option<ForestKind>,

    /// Only give codes to bytes that occur in the input
    #[arg(long)]
    drop_unused: bool,

    /// Print the code of every byte present in the input
    #[arg(long)]
    show_codes: bool,

    /// Print the Huffman tree
    #[arg(long)]
    show_tree: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();

    // Custom formatter: just print the level and message
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    let _ = builder.try_init();
}

fn load_config(cli: &Cli) -> Result<EncoderConfig> {
    let mut config = match &cli.config {
        Some(path) => EncoderConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EncoderConfig::default(),
    };
    if let Some(forest) = cli.forest {
        config.forest = forest;
    }
    if cli.drop_unused {
        config.retain_unused_symbols = false;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let encoder = HuffmanEncoder::new(config);

    let data = fs::read(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    // nothing touches the output until encoding has succeeded
    let plan = encoder
        .plan(&data)
        .with_context(|| format!("Failed to encode {}", cli.input.display()))?;
    let encoded = match &plan {
        Some(plan) => {
            if cli.show_tree {
                print!("{}", plan.tree.render_structure());
            }
            if cli.show_codes {
                print!("{}", plan.table.render(&plan.frequencies));
            }
            encoder
                .encode_with(&data, plan)
                .with_context(|| format!("Failed to encode {}", cli.input.display()))?
        }
        None => EncodedData::empty(),
    };

    encoded
        .write_file(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    let summary = EncodeSummary::from(&encoded);
    println!(
        "{} bytes -> {} bytes ({} bits, {} padding)",
        summary.input_bytes, summary.output_bytes, summary.bit_count, summary.padding_bits
    );
    Ok(())
}
