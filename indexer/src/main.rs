//! ROM Indexer CLI - rebuild `roms_data.json` from the ROM spreadsheet export
//!
//! ```bash
//! rom-indexer
//! ```
//!
//! Input and output paths are the constants in [`rom_indexer::config`].
//! Progress goes to stderr; the summary, or the error, goes to stdout.

use rom_indexer::{convert_with, ConvertOptions};

fn main() {
    let options = ConvertOptions::default();

    match convert_with(&options) {
        Ok(dataset) => {
            println!(
                "Conversion successful! JSON data saved to {}",
                options.output_path.display()
            );
            println!("{}", dataset.summary());
        }
        Err(e) => {
            println!("Error during conversion: {}", e);
            std::process::exit(1);
        }
    }
}
