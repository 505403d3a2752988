use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Generate build timestamp
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    println!("cargo:rustc-env=FEXPLORER_BUILD_TIMESTAMP={timestamp}");

    let rustc = Command::new("rustc")
        .arg("--version")
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default();
    println!(
        "cargo:rustc-env=FEXPLORER_RUSTC_VERSION={}",
        if rustc.is_empty() { "unknown" } else { &rustc }
    );

    // Git is optional: builds from a tarball have no repository
    let sha = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default();
    println!(
        "cargo:rustc-env=FEXPLORER_GIT_SHA={}",
        if sha.is_empty() { "unknown" } else { &sha }
    );
}
