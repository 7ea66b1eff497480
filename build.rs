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

    write_karatsuba_cutoff(&outdir_path, "karatsuba_cutoff.rs")?;
    Ok(())
}

/// Create karatsuba_cutoff.rs, containing definition of constant KARATSUBA_CUTOFF
fn write_karatsuba_cutoff(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let cutoff = env::var("RUST_DECIMAL_BIGINT_KARATSUBA_CUTOFF")
        .map(|s| s.parse::<std::num::NonZeroUsize>().expect("$RUST_DECIMAL_BIGINT_KARATSUBA_CUTOFF must be an integer > 0"))
        .map(|nz_num| nz_num.get())
        .unwrap_or(96usize);

    let karatsuba_cutoff_rs_path = outdir_path.join(filename);

    let karatsuba_cutoff = format!("const KARATSUBA_CUTOFF: usize = {cutoff};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&karatsuba_cutoff_rs_path) {
        Ok(existing_contents) if existing_contents == karatsuba_cutoff => {},
        _ => {
            let mut karatsuba_cutoff_rs = File::create(&karatsuba_cutoff_rs_path)
                .expect("Could not create karatsuba_cutoff.rs");
            write!(karatsuba_cutoff_rs, "{karatsuba_cutoff}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", karatsuba_cutoff_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_DECIMAL_BIGINT_KARATSUBA_CUTOFF");

    Ok(())
}
