//
// Copyright (c) 2024 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use std::path::Path;

// Generates the SDK version and http User-Agent strings used by the client.
fn main() {
    let out_dir = std::env::var_os("OUT_DIR").expect("OUT_DIR not set by cargo");
    let version = env!("CARGO_PKG_VERSION");
    let rustc = rustc_version::version().expect("unable to determine rustc version");
    let ua = format!(
        "RDS-RustSDK/{} (rust{}; {}/{})",
        version,
        rustc,
        std::env::consts::ARCH,
        std::env::consts::OS
    );
    let code = format!(
        "const USER_AGENT: &str = \"{}\";\nconst SDK_VERSION: &str = \"{}\";\n",
        ua, version
    );
    std::fs::write(Path::new(&out_dir).join("ua.rs"), code).expect("unable to write ua.rs");
    println!("cargo::rerun-if-changed=build.rs");
}
