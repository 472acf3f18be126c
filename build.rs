use std::{env, process::Command};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let commit = git(&["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".into());
    let tree = match git(&["status", "--porcelain"]) {
        Some(changes) if changes.is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    };
    println!("cargo:rustc-env=EXPENSE_TRACKER_COMMIT={commit}");
    println!("cargo:rustc-env=EXPENSE_TRACKER_TREE={tree}");

    // TARGET and PROFILE are only visible to build scripts; forward them.
    for var in ["TARGET", "PROFILE"] {
        let value = env::var(var).unwrap_or_else(|_| "unknown".into());
        println!("cargo:rustc-env=EXPENSE_TRACKER_{var}={value}");
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
