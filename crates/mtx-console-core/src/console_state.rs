//! View state of the console and the transitions driven by user events.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::command_interpreter::{interpret, InterpreterAction};
use crate::console_catalog::{ConsoleSetting, ConsoleSettings};
use crate::response_queue::{ResponseQueue, DEFAULT_RESPONSE_DELAY_MS};
use crate::ConsoleLocale;

/// Dashboard tabs; exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTab {
    #[default]
    Dashboard,
    Commands,
    Chat,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab '{0}' (expected dashboard|commands|chat|settings)")]
pub struct TabParseError(pub String);

impl ConsoleTab {
    /// Tabs in navigation order.
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Commands, Self::Chat, Self::Settings];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Commands => "commands",
            Self::Chat => "chat",
            Self::Settings => "settings",
        }
    }

    /// Localized tab caption.
    pub fn label(self, locale: ConsoleLocale) -> &'static str {
        let strings = locale.strings();
        match self {
            Self::Dashboard => strings.tab_dashboard,
            Self::Commands => strings.tab_commands,
            Self::Chat => strings.tab_chat,
            Self::Settings => strings.tab_settings,
        }
    }
}

impl fmt::Display for ConsoleTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsoleTab {
    type Err = TabParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == raw.trim())
            .ok_or_else(|| TabParseError(raw.to_string()))
    }
}

/// Who produced a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Command,
    Response,
    System,
    Error,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Response => "response",
            Self::System => "system",
            Self::Error => "error",
        }
    }
}

/// One line of the chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleMessage {
    /// Monotonic per-state sequence number, never reused after a clear.
    pub id: u64,
    pub text: String,
    pub kind: MessageKind,
}

/// Login gate buffers and the authenticated flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSession {
    pub is_logged_in: bool,
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("username and password are both required")]
    MissingCredentials,
    #[error("a session is already active")]
    AlreadyAuthenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of submitting the chat input.
pub enum CommandDispatch {
    /// Blank input, or no active session.
    Ignored,
    /// `/clear` emptied the history.
    Cleared,
    /// A canned response will be appended at `due_at_ms`.
    Scheduled { due_at_ms: u64 },
}

/// All view state of one console, driven by a caller-supplied clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleState {
    locale: ConsoleLocale,
    response_delay_ms: u64,
    session: ConsoleSession,
    messages: Vec<ConsoleMessage>,
    next_message_id: u64,
    active_tab: ConsoleTab,
    mobile_menu_open: bool,
    command_input: String,
    settings: ConsoleSettings,
    pending: ResponseQueue,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(ConsoleLocale::default(), DEFAULT_RESPONSE_DELAY_MS)
    }
}

impl ConsoleState {
    /// Logged-out state on the dashboard tab.
    pub fn new(locale: ConsoleLocale, response_delay_ms: u64) -> Self {
        Self {
            locale,
            response_delay_ms,
            session: ConsoleSession::default(),
            messages: Vec::new(),
            next_message_id: 0,
            active_tab: ConsoleTab::default(),
            mobile_menu_open: false,
            command_input: String::new(),
            settings: ConsoleSettings::default(),
            pending: ResponseQueue::new(),
        }
    }

    pub fn locale(&self) -> ConsoleLocale {
        self.locale
    }

    pub fn response_delay_ms(&self) -> u64 {
        self.response_delay_ms
    }

    pub fn session(&self) -> &ConsoleSession {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in
    }

    /// Validation message shown under the login form.
    pub fn login_error(&self) -> Option<&str> {
        self.session.error.as_deref()
    }

    pub fn messages(&self) -> &[ConsoleMessage] {
        &self.messages
    }

    pub fn active_tab(&self) -> ConsoleTab {
        self.active_tab
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn command_input(&self) -> &str {
        &self.command_input
    }

    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    /// Replies scheduled but not yet appended.
    pub fn pending_response_count(&self) -> usize {
        self.pending.len()
    }

    /// Due time of the oldest pending reply.
    pub fn next_due_at_ms(&self) -> Option<u64> {
        self.pending.next_due_at_ms()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.session.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.session.password = value.into();
    }

    /// Replaces the chat input buffer.
    pub fn set_command_input(&mut self, value: impl Into<String>) {
        self.command_input = value.into();
    }

    fn push_message(&mut self, text: impl Into<String>, kind: MessageKind) {
        let id = self.next_message_id;
        self.next_message_id = self.next_message_id.saturating_add(1);
        self.messages.push(ConsoleMessage {
            id,
            text: text.into(),
            kind,
        });
    }

    /// Accepts any non-empty username/password pair.
    ///
    /// A submit while a session is active is rejected and the typed buffers
    /// are discarded, so the live session never holds credentials.
    pub fn submit_login(&mut self) -> Result<(), LoginError> {
        if self.session.is_logged_in {
            debug!("login rejected: session already active");
            self.session.username.clear();
            self.session.password.clear();
            return Err(LoginError::AlreadyAuthenticated);
        }
        if self.session.username.is_empty() || self.session.password.is_empty() {
            let error = LoginError::MissingCredentials;
            debug!(%error, "login rejected");
            self.session.error = Some(self.locale.strings().login_missing_credentials.to_string());
            return Err(error);
        }

        info!(username = %self.session.username, "console session opened");
        self.session = ConsoleSession {
            is_logged_in: true,
            ..ConsoleSession::default()
        };
        self.push_message(self.locale.strings().login_succeeded, MessageKind::System);
        Ok(())
    }

    /// Restores the session, history, input, tab, menu and settings to their
    /// initial values.
    ///
    /// Replies already scheduled are kept and still land after their delay.
    pub fn logout(&mut self) {
        if !self.pending.is_empty() {
            debug!(pending = self.pending.len(), "replies outlive the session");
        }
        info!("console session closed");
        let pending = std::mem::take(&mut self.pending);
        *self = Self {
            next_message_id: self.next_message_id,
            pending,
            ..Self::new(self.locale, self.response_delay_ms)
        };
    }

    /// Makes `tab` the only visible panel and closes the mobile menu.
    pub fn select_tab(&mut self, tab: ConsoleTab) {
        debug!(tab = %tab, "tab selected");
        self.active_tab = tab;
        self.mobile_menu_open = false;
    }

    /// Flips the mobile menu overlay; returns whether it is now open.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Flips one settings checkbox; returns its new value.
    pub fn toggle_setting(&mut self, setting: ConsoleSetting) -> bool {
        let enabled = self.settings.toggle(setting);
        debug!(setting = %setting, enabled, "setting toggled");
        enabled
    }

    /// Submits the pending chat input to the interpreter.
    pub fn send_command(&mut self, now_ms: u64) -> CommandDispatch {
        if !self.session.is_logged_in || is_blank_input(&self.command_input) {
            return CommandDispatch::Ignored;
        }

        let input = std::mem::take(&mut self.command_input);
        self.push_message(input.as_str(), MessageKind::Command);
        match interpret(&input, self.locale.strings()) {
            InterpreterAction::ClearHistory => {
                debug!("chat history cleared by command");
                self.messages.clear();
                CommandDispatch::Cleared
            }
            InterpreterAction::Respond(text) => {
                let due_at_ms = now_ms.saturating_add(self.response_delay_ms);
                debug!(command = %input, due_at_ms, "canned response scheduled");
                self.pending.schedule(text, due_at_ms);
                CommandDispatch::Scheduled { due_at_ms }
            }
        }
    }

    /// Trash-button clear: empties the history and notes it.
    pub fn clear_chat(&mut self) {
        self.messages.clear();
        self.push_message(self.locale.strings().chat_cleared, MessageKind::System);
    }

    /// Appends every response whose delay has elapsed; returns how many.
    pub fn deliver_due(&mut self, now_ms: u64) -> usize {
        let due = self.pending.drain_due(now_ms);
        let delivered = due.len();
        for response in due {
            self.push_message(response.text, MessageKind::Response);
        }
        if delivered > 0 {
            debug!(delivered, now_ms, "canned responses delivered");
        }
        delivered
    }

    /// Messages with an id at or after `id`, in order.
    pub fn messages_since(&self, id: u64) -> impl Iterator<Item = &ConsoleMessage> {
        self.messages.iter().filter(move |message| message.id >= id)
    }

    /// Id the next appended message will get.
    pub fn next_message_id(&self) -> u64 {
        self.next_message_id
    }
}

/// True when `input` holds nothing but whitespace or byte-order marks.
pub fn is_blank_input(input: &str) -> bool {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}
