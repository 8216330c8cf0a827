use huffpack::{bytes_to_bits, EncoderConfig, HuffmanEncoder};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sample_text = "Hello, world! This is a sample text for Huffman compression. \
                      The quick brown fox jumps over the lazy dog. \
                      Huffman encoding is a greedy algorithm that builds optimal prefix codes.";

    std::fs::write("sample.txt", sample_text)?;
    println!("Created sample file: {} bytes", sample_text.len());

    let encoder = HuffmanEncoder::new(EncoderConfig {
        retain_unused_symbols: false,
        ..EncoderConfig::default()
    });

    if let Some(plan) = encoder.plan(sample_text.as_bytes())? {
        print!("{}", plan.table.render(&plan.frequencies));
    }

    let summary = encoder.encode_file(Path::new("sample.txt"), Path::new("sample.huff"))?;
    println!(
        "Compressed to: {} bytes ({:.1}% of original), {} padding bits",
        summary.output_bytes,
        summary.output_bytes as f64 / summary.input_bytes as f64 * 100.0,
        summary.padding_bits
    );

    let packed = std::fs::read("sample.huff")?;
    let bits = bytes_to_bits(&packed, summary.bit_count)?;
    println!("First 64 bits: {}", &bits[..bits.len().min(64)]);

    std::fs::remove_file("sample.txt")?;
    std::fs::remove_file("sample.huff")?;
    println!("Cleaned up temporary files");

    Ok(())
}
