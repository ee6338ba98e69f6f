#![allow(clippy::style)]

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_max_precision(&outdir_path, "max_precision.rs")?;
    write_max_iterations(&outdir_path, "max_iterations.rs")?;
    Ok(())
}

/// Create max_precision.rs, containing definition of constant MAX_PRECISION
fn write_max_precision(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()> {
    let max_prec = env::var("RUST_BIGDECIMAL_MATH_MAX_PRECISION")
        .map(|s| s.parse::<std::num::NonZeroU32>().expect("$RUST_BIGDECIMAL_MATH_MAX_PRECISION must be an integer > 0"))
        .map(|nz_num| nz_num.get())
        .unwrap_or(500u32);

    let contents = format!("pub const MAX_PRECISION: i64 = {max_prec};");
    write_if_changed(&outdir_path.join(filename), &contents)?;

    println!("cargo:rerun-if-env-changed={}", "RUST_BIGDECIMAL_MATH_MAX_PRECISION");
    Ok(())
}

/// Create max_iterations.rs, containing definition of constant MAX_ITERATIONS
fn write_max_iterations(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()> {
    let max_iter = env::var("RUST_BIGDECIMAL_MATH_MAX_ITERATIONS")
        .map(|s| s.parse::<std::num::NonZeroU32>().expect("$RUST_BIGDECIMAL_MATH_MAX_ITERATIONS must be an integer > 0"))
        .map(|nz_num| nz_num.get())
        .unwrap_or(10_000u32);

    let contents = format!("pub const MAX_ITERATIONS: u32 = {max_iter};");
    write_if_changed(&outdir_path.join(filename), &contents)?;

    println!("cargo:rerun-if-env-changed={}", "RUST_BIGDECIMAL_MATH_MAX_ITERATIONS");
    Ok(())
}

fn write_if_changed(path: &PathBuf, contents: &str) -> std::io::Result<()> {
    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(path) {
        Ok(existing_contents) if existing_contents == contents => {},
        _ => {
            let mut file = File::create(path)?;
            write!(file, "{contents}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", path.display());
    Ok(())
}
