/// Shell completion generation for git-tidy
///
/// Generates completion scripts for bash, zsh, and fish via clap_complete,
/// either to stdout or installed into the standard per-shell location.
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::{Path, PathBuf};

/// Name the completion scripts are generated under.
const COMMAND_NAME: &str = "git-tidy";

#[derive(Parser)]
#[command(name = "git-tidy-completions")]
#[command(about = "Generate shell completion scripts for git-tidy")]
pub struct Args {
    #[arg(value_enum, help = "Shell to emit a completion script for")]
    shell: Shell,

    #[arg(
        short,
        long,
        help = "Install the completion script to the standard shell location"
    )]
    install: bool,
}

pub fn run() -> Result<()> {
    // Invoked as `git-tidy completions <shell>`. clap must not see the
    // subcommand word itself.
    let mut argv: Vec<String> = std::env::args().collect();
    if argv.get(1).map(String::as_str) == Some("completions") {
        argv.remove(1);
    }

    let args = Args::parse_from(&argv);

    if args.install {
        install_completions(args.shell)
    } else {
        generate(
            args.shell,
            &mut super::tidy::Args::command(),
            COMMAND_NAME,
            &mut io::stdout(),
        );
        Ok(())
    }
}

/// Write the completion script into the shell's standard directory.
fn install_completions(shell: Shell) -> Result<()> {
    let install_dir = completion_dir(shell)?;

    std::fs::create_dir_all(&install_dir)
        .with_context(|| format!("Failed to create completion directory: {install_dir:?}"))?;

    let file_path = install_dir.join(completion_filename(shell));
    eprintln!("Installing: {}", file_path.display());

    let file = std::fs::File::create(&file_path)
        .with_context(|| format!("Failed to create completion file: {file_path:?}"))?;
    let mut writer = io::BufWriter::new(file);
    generate(
        shell,
        &mut super::tidy::Args::command(),
        COMMAND_NAME,
        &mut writer,
    );

    print_post_install_message(shell);
    Ok(())
}

fn xdg_dir(var: &str, home: &Path, fallback: &str) -> PathBuf {
    std::env::var_os(var)
        .map(PathBuf::from)
        .unwrap_or_else(|| home.join(fallback))
}

/// Where each shell expects user completion scripts.
fn completion_dir(shell: Shell) -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;

    let dir = match shell {
        Shell::Bash => {
            xdg_dir("XDG_DATA_HOME", &home, ".local/share").join("bash-completion/completions")
        }
        // ~/.zfunc is the conventional user fpath entry
        Shell::Zsh => home.join(".zfunc"),
        Shell::Fish => xdg_dir("XDG_CONFIG_HOME", &home, ".config").join("fish/completions"),
        _ => anyhow::bail!("Unsupported shell: {:?}", shell),
    };

    Ok(dir)
}

/// Per-shell naming convention for the script file.
fn completion_filename(shell: Shell) -> String {
    match shell {
        Shell::Bash => COMMAND_NAME.to_string(),
        Shell::Zsh => format!("_{COMMAND_NAME}"),
        Shell::Fish => format!("{COMMAND_NAME}.fish"),
        _ => format!("{COMMAND_NAME}.{shell:?}").to_lowercase(),
    }
}

fn print_post_install_message(shell: Shell) {
    match shell {
        Shell::Bash => {
            eprintln!("\nbash-completion picks the script up from there.");
            eprintln!("If completions stay missing, source it from your ~/.bashrc:");
            eprintln!("  . /usr/share/bash-completion/bash_completion");
        }
        Shell::Zsh => {
            eprintln!("\nMake sure ~/.zfunc is on fpath before compinit runs,");
            eprintln!("for example in ~/.zshrc:");
            eprintln!("  fpath=(~/.zfunc $fpath)");
            eprintln!("  autoload -Uz compinit && compinit");
        }
        Shell::Fish => {
            eprintln!("\nfish loads the script automatically on its next startup.");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_filenames() {
        assert_eq!(completion_filename(Shell::Bash), "git-tidy");
        assert_eq!(completion_filename(Shell::Zsh), "_git-tidy");
        assert_eq!(completion_filename(Shell::Fish), "git-tidy.fish");
    }

    #[test]
    fn test_completion_dirs_honor_xdg_overrides() {
        let home = Path::new("/home/someone");
        assert_eq!(
            xdg_dir("GIT_TIDY_TEST_UNSET_VAR", home, ".local/share"),
            home.join(".local/share")
        );
    }
}
