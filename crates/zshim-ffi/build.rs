use std::env;
use std::fs;
use std::path::PathBuf;

/// `CONFIG_SYS_CLOCK_TICKS_PER_SEC` on Cortex-M with the SysTick driver.
const DEFAULT_TICKS_PER_SEC: u32 = 10_000;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");
    println!("cargo:rerun-if-env-changed=ZSHIM_SYS_CLOCK_TICKS_PER_SEC");

    let ticks_per_sec = match env::var("ZSHIM_SYS_CLOCK_TICKS_PER_SEC") {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&hz| hz > 0)
            .unwrap_or_else(|| {
                panic!("ZSHIM_SYS_CLOCK_TICKS_PER_SEC must be a positive integer, got {raw:?}")
            }),
        Err(_) => DEFAULT_TICKS_PER_SEC,
    };
    fs::write(
        out_dir.join("clock.rs"),
        format!("pub(crate) const SYS_CLOCK_TICKS_PER_SEC: u32 = {ticks_per_sec};\n"),
    )
    .expect("failed to write clock.rs");

    let config = cbindgen::Config::from_file(PathBuf::from(&crate_dir).join("cbindgen.toml"))
        .expect("failed to read cbindgen.toml");

    let output_dir = PathBuf::from(&crate_dir).join("include");
    fs::create_dir_all(&output_dir).expect("failed to create include/ directory");

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
        .expect("cbindgen failed to generate bindings")
        .write_to_file(output_dir.join("zshim.h"));
}
