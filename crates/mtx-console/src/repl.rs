//! Terminal front end over the same console runtime the page host uses.

use std::io::Write;

use anyhow::{Context, Result};
use mtx_console_core::{ConsoleMessage, ConsoleRuntime, ConsoleSetting, ConsoleTab, LoginError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const REPL_HELP: &str = "\
console actions:
  :tab <dashboard|commands|chat|settings>
  :menu
  :setting <notifications|dark-mode|activity-logging>
  :clear
  :state
  :logout
  :quit
anything else is sent to the chat box";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplAction {
    Send(String),
    Tab(ConsoleTab),
    Menu,
    Setting(ConsoleSetting),
    Clear,
    State,
    Logout,
    Help,
    Quit,
    Invalid(String),
}

fn parse_repl_line(line: &str) -> ReplAction {
    let Some(action) = line.trim().strip_prefix(':') else {
        return ReplAction::Send(line.to_string());
    };
    let mut parts = action.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let argument = parts.next().map(str::trim).unwrap_or_default();
    match name {
        "tab" => match argument.parse::<ConsoleTab>() {
            Ok(tab) => ReplAction::Tab(tab),
            Err(error) => ReplAction::Invalid(error.to_string()),
        },
        "setting" => match argument.parse::<ConsoleSetting>() {
            Ok(setting) => ReplAction::Setting(setting),
            Err(error) => ReplAction::Invalid(error.to_string()),
        },
        "menu" => ReplAction::Menu,
        "clear" => ReplAction::Clear,
        "state" => ReplAction::State,
        "logout" => ReplAction::Logout,
        "help" => ReplAction::Help,
        "quit" | "exit" => ReplAction::Quit,
        _ => ReplAction::Invalid(format!("unknown console action ':{name}' (try :help)")),
    }
}

fn write_message<W: Write>(output: &mut W, message: &ConsoleMessage) -> Result<()> {
    writeln!(output, "[{}] {}", message.kind.as_str(), message.text)
        .context("failed to write console message")
}

/// Runs until `:quit` or end of input.
pub(crate) async fn run_console_repl<R, W>(
    runtime: ConsoleRuntime,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut next_unprinted_id = 0_u64;

    loop {
        let state = runtime.snapshot().await;
        let strings = state.locale().strings();

        if !state.is_logged_in() {
            write!(output, "{}: ", strings.username_label)?;
            output.flush()?;
            let Some(username) = lines.next_line().await? else {
                break;
            };
            write!(output, "{}: ", strings.password_label)?;
            output.flush()?;
            let Some(password) = lines.next_line().await? else {
                break;
            };
            if let Err(LoginError::MissingCredentials) = runtime.login(username, password).await
            {
                writeln!(output, "! {}", strings.login_missing_credentials)?;
            }
        } else {
            write!(output, "> ")?;
            output.flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match parse_repl_line(&line) {
                ReplAction::Send(text) => {
                    runtime.send_command(text).await;
                    runtime.settle().await;
                }
                ReplAction::Tab(tab) => {
                    runtime.update(|state| state.select_tab(tab)).await;
                    writeln!(output, "[tab] {} ({})", tab, tab.label(state.locale()))?;
                }
                ReplAction::Menu => {
                    let open = runtime.update(|state| state.toggle_mobile_menu()).await;
                    writeln!(output, "[menu] {}", if open { "open" } else { "closed" })?;
                }
                ReplAction::Setting(setting) => {
                    let enabled = runtime.update(|state| state.toggle_setting(setting)).await;
                    writeln!(
                        output,
                        "[setting] {} = {}",
                        setting,
                        if enabled { "on" } else { "off" }
                    )?;
                }
                ReplAction::Clear => runtime.update(|state| state.clear_chat()).await,
                ReplAction::State => {
                    let snapshot = runtime.snapshot().await;
                    let rendered = serde_json::to_string_pretty(&snapshot)
                        .context("failed to serialize console state")?;
                    writeln!(output, "{rendered}")?;
                }
                ReplAction::Logout => runtime.update(|state| state.logout()).await,
                ReplAction::Help => writeln!(output, "{REPL_HELP}")?,
                ReplAction::Quit => break,
                ReplAction::Invalid(reason) => writeln!(output, "! {reason}")?,
            }
        }

        let state = runtime.snapshot().await;
        for message in state.messages_since(next_unprinted_id) {
            write_message(output, message)?;
        }
        next_unprinted_id = state.next_message_id();
    }

    output.flush()?;
    Ok(())
}
