use std::process::Command;

fn git_stdout(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_owned())
}

/// "dev {branch} {hash}" for the current checkout, or None when HEAD
/// cannot be resolved (release tarballs, no git on the build host).
fn dev_suffix() -> Option<String> {
    let hash = git_stdout(&["rev-parse", "--short", "HEAD"])?;
    Some(match git_stdout(&["rev-parse", "--abbrev-ref", "HEAD"]) {
        Some(branch) => format!("dev {branch} {hash}"),
        None => format!("dev {hash}"),
    })
}

fn main() {
    let version = std::env::var("CARGO_PKG_VERSION").unwrap();

    // Man pages get the bare package version.
    println!("cargo:rustc-env=GIT_TIDY_VERSION={version}");

    // `git-tidy --version` additionally carries branch and commit on dev
    // builds. GIT_TIDY_BUILD_RELEASE forces the bare version for packaging.
    let suffix = if std::env::var("GIT_TIDY_BUILD_RELEASE").is_ok() {
        None
    } else {
        dev_suffix()
    };
    let display = match suffix {
        Some(s) => format!("{version} ({s})"),
        None => version,
    };
    println!("cargo:rustc-env=GIT_TIDY_VERSION_DISPLAY={display}");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=GIT_TIDY_BUILD_RELEASE");
}
