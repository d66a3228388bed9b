//! Records the build time so the binary can be seeded from it.

use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis();
    println!("cargo:rustc-env=BAKEDSEED_BUILD_MILLIS={}", millis);
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src");
}
