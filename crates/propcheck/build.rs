use std::process::Command;

// `propcheck version --extended` reports these.
fn main() {
    if let Ok(target) = std::env::var("TARGET") {
        println!("cargo:rustc-env=PROPCHECK_BUILD_TARGET={target}");
    }

    // An explicit GIT_HASH in the environment wins over the checkout.
    if std::env::var_os("GIT_HASH").is_none() {
        if let Some(hash) = git_short_hash() {
            println!("cargo:rustc-env=GIT_HASH={hash}");
        }
    }

    println!("cargo:rerun-if-env-changed=TARGET");
    println!("cargo:rerun-if-env-changed=GIT_HASH");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}
