//! CLI argument parsing
//!
//! Uses clap for argument parsing with derive macros.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

/// Five buttons, five alert dialogs, one status line
#[derive(Parser, Debug)]
#[command(name = "botones-alerta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ~/.config/botones-alerta/config.toml)
    #[arg(short, long, env = "BOTONES_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Run in debug mode (shows transition log)
    #[arg(short, long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Input poll rate in ticks per second (default: 50.0)
    #[arg(short = 't', long, default_value_t = 50.0, global = true)]
    pub tick_rate: f64,

    /// Frame rate in frames per second (default: 30.0)
    #[arg(short = 'F', long, default_value_t = 30.0, global = true)]
    pub frame_rate: f64,

    /// Do not capture the mouse, overriding the config file
    #[arg(long, default_value_t = false, global = true)]
    pub no_mouse: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every dialog's title, message and buttons
    Catalog,

    /// Print the config file path and an example config
    Config,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Generate shell completions and print to stdout
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "botones-alerta", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["botones-alerta"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
        assert!(!cli.no_mouse);
        assert!((cli.frame_rate - 30.0).abs() < f64::EPSILON);
        assert!((cli.tick_rate - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tick_rate_flag() {
        let cli = Cli::try_parse_from(["botones-alerta", "--tick-rate", "4"]).unwrap();
        assert!((cli.tick_rate - 4.0).abs() < f64::EPSILON);

        // Global, so accepted after a subcommand too
        let cli = Cli::try_parse_from(["botones-alerta", "catalog", "-t", "10"]).unwrap();
        assert!((cli.tick_rate - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_from(["botones-alerta", "catalog"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Catalog)));

        let cli = Cli::try_parse_from(["botones-alerta", "config"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config)));

        let cli = Cli::try_parse_from(["botones-alerta", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Bash })
        ));
    }
}
