//! View state and chat interpreter for the MTX bot console.
//!
//! Holds the login gate, tab navigation, canned-response interpreter and the
//! delayed reply queue. Rendering lives in `mtx-console-ui`; hosting lives in
//! the `mtx-console` binary.

pub mod command_interpreter;
pub mod console_catalog;
pub mod console_locale;
pub mod console_runtime;
pub mod console_state;
pub mod response_queue;

pub use command_interpreter::{interpret, CannedCommand, InterpreterAction};
pub use console_catalog::{
    command_reference, recent_activity, stat_cards, CommandReference, ConsoleSetting,
    ConsoleSettings, SettingParseError, StatCard, StatChangeTone,
};
pub use console_locale::{ConsoleLocale, ConsoleStrings, LocaleParseError};
pub use console_runtime::ConsoleRuntime;
pub use console_state::{
    is_blank_input, CommandDispatch, ConsoleMessage, ConsoleSession, ConsoleState, ConsoleTab,
    LoginError, MessageKind, TabParseError,
};
pub use response_queue::{PendingResponse, ResponseQueue, DEFAULT_RESPONSE_DELAY_MS};
