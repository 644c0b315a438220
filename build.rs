use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn stdout_of(cmd: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(cmd).args(args).output().ok()?;
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    println!("cargo:rustc-env=VERGEN_BUILD_TIMESTAMP={timestamp}");

    let rustc = stdout_of("rustc", &["--version"]).unwrap_or_default();
    println!("cargo:rustc-env=VERGEN_RUSTC_SEMVER={rustc}");

    let sha = stdout_of("git", &["rev-parse", "HEAD"]).unwrap_or_default();
    println!("cargo:rustc-env=VERGEN_GIT_SHA={sha}");
}
