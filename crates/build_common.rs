// Shared build script helper turning a crate README into rustdoc.
// Include this in build.rs files with: include!("../build_common.rs");
//
// Required imports in the including file:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Copy the crate's README.md into `OUT_DIR/README_GENERATED.md`, rewriting
/// links so they resolve inside rustdoc.
///
/// - `](src/foo.rs)` becomes `](foo)` so the link points at the module
/// - `](../../README.md` becomes the package repository URL
///
/// A missing README still produces an (empty) generated file so that the
/// `include_str!` in lib.rs never fails.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");

    let readme_path = Path::new(crate_dir).join("README.md");
    let content = fs::read_to_string(&readme_path).unwrap_or_default();

    let mut rustdoc_content = content.replace("](src/", "](").replace(".rs)", ")");

    // CARGO_PKG_REPOSITORY is inherited from [workspace.package]
    if let Ok(url) = env::var("CARGO_PKG_REPOSITORY")
        && !url.is_empty()
    {
        rustdoc_content = rustdoc_content.replace("](../../README.md", &format!("]({url}"));
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");
    fs::write(dest_path, rustdoc_content).unwrap();
}
