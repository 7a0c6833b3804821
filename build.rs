//! Build script to generate embedded word lists
//!
//! Reads the per-language word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const WORD_LISTS: &[(&str, &str, &str, &str)] = &[
    (
        "data/words_en.txt",
        "words_en.rs",
        "WORDS_EN",
        "English answer words",
    ),
    (
        "data/words_fr.txt",
        "words_fr.rs",
        "WORDS_FR",
        "French answer words (unaccented)",
    ),
];

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;

    for &(input, output, const_name, doc_comment) in WORD_LISTS {
        generate_word_list(
            input,
            &Path::new(&out_dir).join(output),
            const_name,
            doc_comment,
        )?;
        println!("cargo:rerun-if-changed={input}");
    }

    Ok(())
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)?;

    writeln!(output, "// Generated word list")?;
    writeln!(output, "//")?;
    writeln!(output, "// {doc_comment} ({count} words)")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment}")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;

    for word in words {
        writeln!(output, "    \"{word}\",")?;
    }

    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};")?;

    Ok(())
}
