#![allow(clippy::style)]

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    println!("cargo:rustc-check-cfg=cfg(property_tests)");

    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_record_book_number(&outdir_path, "record_book_number.rs")?;
    Ok(())
}

/// Create record_book_number.rs, containing definition of constant RECORD_BOOK_NUMBER
fn write_record_book_number(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let number = env::var("RUST_DIGITLIST_RECORD_BOOK_NUMBER")
        .map(|s| s.parse::<u32>().expect("$RUST_DIGITLIST_RECORD_BOOK_NUMBER must be a non-negative integer"))
        .unwrap_or(6u32);

    let record_book_number_rs_path = outdir_path.join(filename);

    let record_book_number = format!("const RECORD_BOOK_NUMBER: u32 = {number};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&record_book_number_rs_path) {
        Ok(existing_contents) if existing_contents == record_book_number => {},
        _ => {
            let mut record_book_number_rs = File::create(&record_book_number_rs_path)
                .expect("Could not create record_book_number.rs");
            write!(record_book_number_rs, "{record_book_number}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", record_book_number_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_DIGITLIST_RECORD_BOOK_NUMBER");

    Ok(())
}
