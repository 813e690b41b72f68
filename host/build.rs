//! Stages the compiled frontend under `static/dist`, where `include_dir!`
//! picks it up. Without a bundle the directory is still created (empty) so
//! the host builds and answers 404.

use std::error::Error;
use std::fs;
use std::path::Path;

use fs_extra::dir::CopyOptions;

const BUNDLE_SRC: &str = "../frontend/dist";
const STAGING_DIR: &str = "static";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed={}", BUNDLE_SRC);

    let source = Path::new(BUNDLE_SRC);
    let staged = Path::new(STAGING_DIR).join("dist");

    if source.join("index.html").is_file() {
        if staged.exists() {
            fs::remove_dir_all(&staged)?;
        }
        fs::create_dir_all(STAGING_DIR)?;
        // Copies `dist` itself into the staging dir, giving `static/dist`.
        fs_extra::dir::copy(source, STAGING_DIR, &CopyOptions::new().overwrite(true))?;
    } else {
        println!(
            "cargo:warning=no frontend bundle at {}; run `trunk build` in frontend/ to embed the storefront",
            BUNDLE_SRC
        );
    }

    fs::create_dir_all(&staged)?;
    Ok(())
}
