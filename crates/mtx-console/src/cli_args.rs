use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mtx_console_core::{ConsoleLocale, ConsoleTab};

fn parse_console_tab(value: &str) -> Result<ConsoleTab, String> {
    value.parse::<ConsoleTab>().map_err(|error| error.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliConsoleLocale {
    Arabic,
    English,
}

impl From<CliConsoleLocale> for ConsoleLocale {
    fn from(value: CliConsoleLocale) -> Self {
        match value {
            CliConsoleLocale::Arabic => ConsoleLocale::Arabic,
            CliConsoleLocale::English => ConsoleLocale::English,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "mtx-console",
    about = "MTX bot control panel and chat console",
    version
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "MTX_CONSOLE_CONFIG",
        help = "Optional TOML config file (bind, response_delay_ms, locale)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "response-delay-ms",
        global = true,
        env = "MTX_CONSOLE_RESPONSE_DELAY_MS",
        help = "Delay before a canned chat response is appended (default 200)"
    )]
    pub response_delay_ms: Option<u64>,

    #[arg(
        long,
        global = true,
        value_enum,
        env = "MTX_CONSOLE_LOCALE",
        help = "Display language of the console (default arabic)"
    )]
    pub locale: Option<CliConsoleLocale>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Host the console page on a local HTTP listener.
    Serve {
        #[arg(
            long,
            env = "MTX_CONSOLE_BIND",
            help = "Socket address for the page host (default 127.0.0.1:8790)"
        )]
        bind: Option<String>,
    },
    /// Drive the console from the terminal.
    Repl,
    /// Print one rendered HTML page to stdout.
    Render {
        #[arg(long, help = "Render the dashboard shell instead of the login gate")]
        logged_in: bool,

        #[arg(
            long,
            value_parser = parse_console_tab,
            help = "Active tab: dashboard|commands|chat|settings"
        )]
        tab: Option<ConsoleTab>,

        #[arg(
            long = "message",
            help = "Chat input to send before rendering; repeatable"
        )]
        messages: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use mtx_console_core::ConsoleTab;

    use super::{Cli, CliCommand, CliConsoleLocale};

    #[test]
    fn unit_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mtx-console",
            "repl",
            "--locale",
            "english",
            "--response-delay-ms",
            "0",
        ])
        .expect("parse succeeds");
        assert!(matches!(cli.command, CliCommand::Repl));
        assert_eq!(cli.locale, Some(CliConsoleLocale::English));
        assert_eq!(cli.response_delay_ms, Some(0));
    }

    #[test]
    fn functional_render_collects_tab_and_messages() {
        let cli = Cli::try_parse_from([
            "mtx-console",
            "render",
            "--logged-in",
            "--tab",
            "chat",
            "--message",
            "/help",
            "--message",
            "/stats",
        ])
        .expect("parse succeeds");
        let CliCommand::Render {
            logged_in,
            tab,
            messages,
        } = cli.command
        else {
            panic!("expected render command");
        };
        assert!(logged_in);
        assert_eq!(tab, Some(ConsoleTab::Chat));
        assert_eq!(messages, vec!["/help".to_string(), "/stats".to_string()]);
    }

    #[test]
    fn regression_render_rejects_unknown_tab() {
        let error = Cli::try_parse_from(["mtx-console", "render", "--tab", "profile"])
            .expect_err("unknown tab");
        assert!(error.to_string().contains("unknown tab 'profile'"));
    }
}
