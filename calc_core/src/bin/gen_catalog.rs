//! Generate CALCULATORS.md from the calculator catalogue.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-catalog
//! ```
//!
//! The generated file is written to `CALCULATORS.md` at the workspace root.

use std::fs;
use std::path::Path;

use calc_core::catalog::generate_catalog_markdown;

fn main() {
    println!("Generating CALCULATORS.md...");

    let markdown = generate_catalog_markdown();
    let output_path = Path::new("CALCULATORS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
