// build.rs has its own module namespace, separate from the main crate.
//
// The only configuration is the staging buffer size, supplied through the environment at build
// time.  It is checked here, then emitted as Rust source into OUT_DIR where `src/internal.rs`
// includes it.

mod check;
use check::{DEFAULT_MAX_TITLE, MAX_TITLE_ENV, check_max_title};

fn main() {
    let max_title = match std::env::var(MAX_TITLE_ENV) {
        Ok(raw) => check_max_title(&raw).unwrap_or_else(|msg| panic!("{MAX_TITLE_ENV}: {msg}")),
        Err(std::env::VarError::NotPresent) => DEFAULT_MAX_TITLE,
        Err(e) => panic!("{MAX_TITLE_ENV}: {e}"),
    };

    let out_dir = std::env::var("OUT_DIR").expect("Expected OUT_DIR to be set");
    let path = std::path::Path::new(&out_dir).join("config.rs");
    let generated = format!(
        "/// Longest visible title, in bytes, excluding the terminator\n\
         pub const MAX_TITLE: usize = {max_title};\n"
    );
    std::fs::write(&path, generated)
        .unwrap_or_else(|e| panic!("Expected to be able to write to {}: {e}", path.display()));

    // Keep last so that these messages do not show up in configuration check errors.
    compiler_instructions();
}

fn compiler_instructions() {
    println!("cargo:rerun-if-env-changed={MAX_TITLE_ENV}");
    println!("cargo:rerun-if-changed=src/build/main.rs");
    println!("cargo:rerun-if-changed=src/build/check.rs");
}
