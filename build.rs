//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Root word candidates, one is picked at random per round
    generate_word_list(
        "data/start.txt",
        &Path::new(&out_dir).join("start_words.rs"),
        "START_WORDS",
        "Eight-letter root words used to start a round",
    );

    // English dictionary for the embedded spell checker
    generate_word_list(
        "data/dictionary.txt",
        &Path::new(&out_dir).join("dictionary.rs"),
        "DICTIONARY",
        "English words accepted by the embedded spell checker",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/start.txt");
    println!("cargo:rerun-if-changed=data/dictionary.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Blank lines never make it into the generated list
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_lowercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
