mod bootstrap;
mod cli_args;
mod console_config;
mod page_host;
mod repl;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use mtx_console_ui::render_mtx_console_page;
use tokio::io::BufReader;

use crate::bootstrap::{console_runtime_from_config, console_state_from_config, init_tracing};
use crate::cli_args::{Cli, CliCommand};
use crate::console_config::{ConsoleConfig, ConsoleConfigOverrides};

const RENDER_OPERATOR_NAME: &str = "operator";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let bind_override = match &cli.command {
        CliCommand::Serve { bind } => bind.clone(),
        _ => None,
    };
    let config = ConsoleConfig::load(
        cli.config.as_deref(),
        ConsoleConfigOverrides {
            bind: bind_override,
            response_delay_ms: cli.response_delay_ms,
            locale: cli.locale.map(Into::into),
        },
    )
    .context("failed to load console config")?;
    tracing::debug!(?config, "console config resolved");

    match cli.command {
        CliCommand::Serve { .. } => {
            page_host::run_console_page_host(&config, console_runtime_from_config(&config)).await
        }
        CliCommand::Repl => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            repl::run_console_repl(console_runtime_from_config(&config), stdin, &mut stdout).await
        }
        CliCommand::Render {
            logged_in,
            tab,
            messages,
        } => {
            let mut state = console_state_from_config(&config);
            if logged_in {
                state.set_username(RENDER_OPERATOR_NAME);
                state.set_password(RENDER_OPERATOR_NAME);
                state
                    .submit_login()
                    .context("failed to open render session")?;
            }
            if let Some(tab) = tab {
                state.select_tab(tab);
            }
            for message in messages {
                state.set_command_input(message);
                state.send_command(0);
            }
            state.deliver_due(u64::MAX);

            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", render_mtx_console_page(&state))
                .context("failed to write rendered page")?;
            Ok(())
        }
    }
}
