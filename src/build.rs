extern crate cbindgen;

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

const HEADER_DIR: &str = "include";
const HEADER_FILE: &str = "site_search.h";

fn main() -> Result<(), Box<dyn Error>> {
    let crate_dir = env::var("CARGO_MANIFEST_DIR")?;
    let mut config: cbindgen::Config = Default::default();
    config.language = cbindgen::Language::C;
    config.include_guard = Some("SITE_SEARCH_H".to_string());

    let header_dir = Path::new(&crate_dir).join(HEADER_DIR);
    fs::create_dir_all(&header_dir)?;

    match cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_config(config)
        .generate() {
        Ok(bindings) => bindings.write_to_file(header_dir.join(HEADER_FILE)),
        Err(e) => return Err(Box::new(e)),
    };

    println!("cargo:rerun-if-changed=src/lib.rs");
    Ok(())
}
