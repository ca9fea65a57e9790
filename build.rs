use std::env;
use std::process::Command;

// Stamp the binary with the crate version, suffixed with the short git
// hash on dev builds so bug reports can name the exact tree.
fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap();

    let full_version = if env::var("PROFILE").as_deref() == Ok("debug") {
        match git_short_hash() {
            Some(hash) if worktree_is_dirty() => format!("{}-dev+{}.dirty", version, hash),
            Some(hash) => format!("{}-dev+{}", version, hash),
            None => format!("{}-dev", version),
        }
    } else {
        version
    };

    println!("cargo:rustc-env=SPECOPS_VERSION={}", full_version);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;

    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn worktree_is_dirty() -> bool {
    ["diff", "diff --cached"].iter().any(|args| {
        let mut argv: Vec<&str> = args.split(' ').collect();
        argv.push("--quiet");
        Command::new("git")
            .args(&argv)
            .status()
            .map(|status| !status.success())
            .unwrap_or(false)
    })
}
