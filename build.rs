//! Build script to embed the built-in candidate word list
//!
//! Reads `data/words.txt` and generates a Rust source file with a const array.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;

    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Built-in candidate target words",
    )?;

    println!("cargo:rerun-if-changed=data/words.txt");
    Ok(())
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;

    // Blank lines and `#` comments never reach the generated list
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let mut output = fs::File::create(output_path)?;

    writeln!(output, "// Generated from {input_path}")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment} ({} words)", words.len())?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;
    for word in &words {
        writeln!(output, "    {word:?},")?;
    }
    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len())?;

    Ok(())
}
