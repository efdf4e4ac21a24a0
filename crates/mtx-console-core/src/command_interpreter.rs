//! Chat box command interpreter: a fixed set of slash literals with canned
//! responses.

use crate::ConsoleStrings;

/// Chat commands with a hardcoded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedCommand {
    Help,
    Status,
    Stats,
    Clear,
}

impl CannedCommand {
    /// Every canned command, in help-text order.
    pub const ALL: [Self; 4] = [Self::Help, Self::Status, Self::Stats, Self::Clear];

    /// Slash literal typed in the chat box.
    pub fn literal(self) -> &'static str {
        match self {
            Self::Help => "/help",
            Self::Status => "/status",
            Self::Stats => "/stats",
            Self::Clear => "/clear",
        }
    }

    /// Case-insensitive exact match of the whole input against a literal.
    ///
    /// Surrounding whitespace is significant: `" /help"` is not `/help`.
    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|command| command.literal() == lowered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the chat box does with one submitted line.
pub enum InterpreterAction {
    /// Wipe the message list synchronously; nothing is scheduled.
    ClearHistory,
    /// Append this text as a response once the reply delay elapses.
    Respond(&'static str),
}

/// Maps raw chat input to its canned action; unknown input gets the fallback text.
pub fn interpret(input: &str, strings: &ConsoleStrings) -> InterpreterAction {
    match CannedCommand::parse(input) {
        Some(CannedCommand::Clear) => InterpreterAction::ClearHistory,
        Some(CannedCommand::Help) => InterpreterAction::Respond(strings.help_response),
        Some(CannedCommand::Status) => InterpreterAction::Respond(strings.status_response),
        Some(CannedCommand::Stats) => InterpreterAction::Respond(strings.stats_response),
        None => InterpreterAction::Respond(strings.unknown_command_response),
    }
}
