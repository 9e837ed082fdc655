//! Command implementations for the locale-kit CLI.
//!
//! Each submodule implements a group of related commands.

mod locales;
mod translate;

pub use locales::{locales, resolve};
pub use translate::{dump, get};

use crate::cli::{Commands, Shell};
use crate::context::Context;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Locales => locales(ctx),
        Commands::Resolve { locale } => resolve(ctx, locale.as_deref()),
        Commands::Get { key, args, locale, or_none } => {
            get(ctx, key, args, locale.as_deref(), *or_none)
        },
        Commands::Dump { locale, section } => dump(ctx, locale.as_deref(), section.as_deref()),
        Commands::Completion { shell } => completion(*shell),
    }
}

/// Generate shell completions.
fn completion(shell: Shell) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{Generator, generate};

    fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
        let name = cmd.get_name().to_string();
        generate(generator, cmd, name, &mut std::io::stdout());
    }

    let mut cmd = crate::cli::Cli::command();
    match shell {
        Shell::Bash => print_completions(clap_complete::shells::Bash, &mut cmd),
        Shell::Zsh => print_completions(clap_complete::shells::Zsh, &mut cmd),
        Shell::Fish => print_completions(clap_complete::shells::Fish, &mut cmd),
        Shell::PowerShell => print_completions(clap_complete::shells::PowerShell, &mut cmd),
    }

    Ok(())
}
