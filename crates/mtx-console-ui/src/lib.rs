//! Leptos SSR rendering for the MTX bot console.
//!
//! The page is a pure function of [`ConsoleState`]: the login gate while no
//! session is active, otherwise the four-tab dashboard shell. Browser events
//! are plain form posts to the action paths declared here.

use leptos::prelude::*;
use mtx_console_core::{
    command_reference, recent_activity, stat_cards, ConsoleSetting, ConsoleState, ConsoleTab,
};

pub const MTX_CONSOLE_PAGE_PATH: &str = "/";
pub const MTX_CONSOLE_LOGIN_ACTION: &str = "/login";
pub const MTX_CONSOLE_LOGOUT_ACTION: &str = "/logout";
pub const MTX_CONSOLE_TAB_ACTION: &str = "/tab";
pub const MTX_CONSOLE_MENU_ACTION: &str = "/menu";
pub const MTX_CONSOLE_CHAT_SEND_ACTION: &str = "/chat/send";
pub const MTX_CONSOLE_CHAT_CLEAR_ACTION: &str = "/chat/clear";
pub const MTX_CONSOLE_SETTINGS_ACTION: &str = "/settings";

const LOGIN_BACKGROUND_IMAGE: &str = "/mtx-hero.jpg";
const SHELL_BACKGROUND_VIDEO: &str = "/mtx-bg.mp4";

const MTX_CONSOLE_STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #020617; color: #f8fafc; }
#mtx-console-login { min-height: 100vh; display: flex; align-items: center; justify-content: center; background-size: cover; background-position: center; }
#mtx-console-login-card { max-width: 28rem; width: 100%; padding: 2rem; border: 2px solid #ef4444; border-radius: 0.75rem; background: #0f172a; }
#mtx-console-login-error { color: #f87171; text-align: center; }
#mtx-console-header { display: flex; justify-content: space-between; align-items: center; padding: 1.5rem 1rem; background: linear-gradient(90deg, #ef4444, #dc2626); }
#mtx-console-tabs { display: flex; flex-wrap: wrap; gap: 0.5rem; padding: 0.5rem; background: #1e293b; border-radius: 0.5rem; }
#mtx-console-tabs button[aria-selected="true"] { background: #ef4444; color: #fff; }
#mtx-console-bg-video { position: fixed; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.1; z-index: -10; }
[data-panel-visible="false"] { display: none; }
.mtx-message { padding: 0.75rem; border-radius: 0.5rem; white-space: pre-line; }
.mtx-message[data-message-kind="command"] { background: #1e3a8a; }
.mtx-message[data-message-kind="response"] { background: #334155; }
.mtx-message[data-message-kind="system"] { background: #14532d; text-align: center; }
.mtx-message[data-message-kind="error"] { background: #7f1d1d; }
.mtx-stat-change[data-change-tone="improving"] { color: #86efac; }
.mtx-stat-change[data-change-tone="neutral"] { color: #93c5fd; }
"#;

/// Renders a complete HTML document for `state`.
pub fn render_mtx_console_page(state: &ConsoleState) -> String {
    let locale = state.locale();
    let strings = locale.strings();
    format!(
        "<!DOCTYPE html><html lang=\"{}\" dir=\"{}\"><head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <title>{}</title><style>{}</style></head><body>{}</body></html>",
        locale.lang_tag(),
        locale.text_direction(),
        strings.bot_title,
        MTX_CONSOLE_STYLES,
        render_mtx_console_shell(state)
    )
}

/// Renders the body fragment: login gate or dashboard shell.
pub fn render_mtx_console_shell(state: &ConsoleState) -> String {
    if state.is_logged_in() {
        render_dashboard_shell(state)
    } else {
        render_login_gate(state)
    }
}

fn render_login_gate(state: &ConsoleState) -> String {
    let strings = state.locale().strings();
    let background = format!("background-image: url('{LOGIN_BACKGROUND_IMAGE}')");
    let login_error = state.login_error().map(|error| {
        let error = error.to_string();
        view! {
            <p id="mtx-console-login-error" role="alert">
                {error}
            </p>
        }
    });

    let gate = view! {
        <div id="mtx-console-login" data-view="login" style=background>
            <section id="mtx-console-login-card" data-component="LoginCard">
                <header>
                    <h1 id="mtx-console-brand">{strings.brand}</h1>
                    <p>{strings.subtitle}</p>
                </header>
                <form
                    id="mtx-console-login-form"
                    method="post"
                    action=MTX_CONSOLE_LOGIN_ACTION
                >
                    <label for="mtx-console-username">{strings.username_label}</label>
                    <input
                        id="mtx-console-username"
                        name="username"
                        type="text"
                        autocomplete="username"
                        placeholder=strings.username_placeholder
                    />
                    <label for="mtx-console-password">{strings.password_label}</label>
                    <input
                        id="mtx-console-password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        placeholder=strings.password_placeholder
                    />
                    {login_error}
                    <button id="mtx-console-login-submit" type="submit">
                        {strings.login_submit}
                    </button>
                </form>
            </section>
        </div>
    };
    gate.to_html()
}

fn panel_visibility(state: &ConsoleState, tab: ConsoleTab) -> (&'static str, &'static str) {
    if state.active_tab() == tab {
        ("true", "false")
    } else {
        ("false", "true")
    }
}

fn render_dashboard_shell(state: &ConsoleState) -> String {
    let locale = state.locale();
    let strings = locale.strings();
    let active_tab = state.active_tab().as_str();
    let menu_open = state.is_mobile_menu_open();
    let menu_open_attr = if menu_open { "true" } else { "false" };
    let menu_label = if menu_open {
        strings.menu_close
    } else {
        strings.menu_open
    };

    let tab_buttons = ConsoleTab::ALL
        .into_iter()
        .map(|tab| {
            let selected = if state.active_tab() == tab {
                "true"
            } else {
                "false"
            };
            let button_id = format!("mtx-console-tab-{}", tab.as_str());
            view! {
                <form method="post" action=MTX_CONSOLE_TAB_ACTION>
                    <input type="hidden" name="tab" value=tab.as_str() />
                    <button
                        id=button_id
                        type="submit"
                        role="tab"
                        data-tab=tab.as_str()
                        aria-selected=selected
                    >
                        {tab.label(locale)}
                    </button>
                </form>
            }
        })
        .collect_view();

    let (dashboard_visible, dashboard_hidden) = panel_visibility(state, ConsoleTab::Dashboard);
    let (commands_visible, commands_hidden) = panel_visibility(state, ConsoleTab::Commands);
    let (chat_visible, chat_hidden) = panel_visibility(state, ConsoleTab::Chat);
    let (settings_visible, settings_hidden) = panel_visibility(state, ConsoleTab::Settings);

    let stat_card_views = stat_cards(locale)
        .iter()
        .map(|card| {
            let card_id = format!("mtx-console-stat-{}", card.key);
            view! {
                <article
                    id=card_id
                    class="mtx-stat-card"
                    data-component="StatCard"
                    data-stat-key=card.key
                    data-accent=card.accent
                >
                    <p class="mtx-stat-label">{card.label}</p>
                    <p class="mtx-stat-value">{card.value}</p>
                    <p class="mtx-stat-change" data-change-tone=card.change_tone().as_str()>
                        {card.change}
                    </p>
                </article>
            }
        })
        .collect_view();

    let activity_views = recent_activity(locale)
        .iter()
        .map(|entry| {
            view! { <li class="mtx-activity-entry">{*entry}</li> }
        })
        .collect_view();

    let command_views = command_reference(locale)
        .iter()
        .map(|command| {
            view! {
                <li class="mtx-command-card" data-command=command.name>
                    <p class="mtx-command-name">{command.name}</p>
                    <p class="mtx-command-description">{command.description}</p>
                </li>
            }
        })
        .collect_view();

    let message_count = state.messages().len().to_string();
    let chat_log = if state.messages().is_empty() {
        view! {
            <li id="mtx-console-chat-empty">{strings.chat_empty}</li>
        }
        .into_any()
    } else {
        state
            .messages()
            .iter()
            .map(|message| {
                let message_id = format!("mtx-console-message-{}", message.id);
                let text = message.text.clone();
                view! {
                    <li
                        id=message_id
                        class="mtx-message"
                        data-message-kind=message.kind.as_str()
                    >
                        {text}
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    let setting_rows = ConsoleSetting::ALL
        .into_iter()
        .map(|setting| {
            let enabled = state.settings().is_enabled(setting);
            let enabled_attr = if enabled { "true" } else { "false" };
            let checked = enabled.then_some("checked");
            let checkbox_id = format!("mtx-console-setting-{}", setting.as_str());
            view! {
                <li class="mtx-setting-row" data-setting=setting.as_str() data-enabled=enabled_attr>
                    <form method="post" action=MTX_CONSOLE_SETTINGS_ACTION>
                        <label for=checkbox_id.clone()>{setting.label(locale)}</label>
                        <input id=checkbox_id type="checkbox" disabled="disabled" checked=checked />
                        <input type="hidden" name="setting" value=setting.as_str() />
                        <button type="submit">{strings.setting_toggle}</button>
                    </form>
                </li>
            }
        })
        .collect_view();

    let menu_logout = menu_open.then(|| {
        view! {
            <form id="mtx-console-menu-logout" method="post" action=MTX_CONSOLE_LOGOUT_ACTION>
                <button type="submit">{strings.logout}</button>
            </form>
        }
    });

    let shell = view! {
        <div id="mtx-console-shell" data-view="dashboard" data-active-tab=active_tab>
            <video id="mtx-console-bg-video" autoplay="autoplay" muted="muted" loop="loop">
                <source src=SHELL_BACKGROUND_VIDEO type="video/mp4" />
            </video>
            <header id="mtx-console-header">
                <div>
                    <h1>{strings.bot_title}</h1>
                    <p>{strings.subtitle}</p>
                </div>
                <form id="mtx-console-menu-toggle" method="post" action=MTX_CONSOLE_MENU_ACTION>
                    <button
                        type="submit"
                        aria-controls="mtx-console-tabs"
                        aria-expanded=menu_open_attr
                        data-mobile-menu-open=menu_open_attr
                    >
                        {menu_label}
                    </button>
                </form>
                <form id="mtx-console-logout" method="post" action=MTX_CONSOLE_LOGOUT_ACTION>
                    <button type="submit">{strings.logout}</button>
                </form>
            </header>
            <main id="mtx-console-main">
                <nav id="mtx-console-tabs" role="tablist">
                    {tab_buttons}
                </nav>
                <section
                    id="mtx-console-panel-dashboard"
                    role="tabpanel"
                    data-panel="dashboard"
                    data-panel-visible=dashboard_visible
                    aria-hidden=dashboard_hidden
                >
                    <div id="mtx-console-stat-grid">{stat_card_views}</div>
                    <section id="mtx-console-activity" data-component="ActivityFeed">
                        <h2>{strings.activity_heading}</h2>
                        <ul>{activity_views}</ul>
                    </section>
                </section>
                <section
                    id="mtx-console-panel-commands"
                    role="tabpanel"
                    data-panel="commands"
                    data-panel-visible=commands_visible
                    aria-hidden=commands_hidden
                >
                    <h2>{strings.commands_heading}</h2>
                    <ul id="mtx-console-command-list">{command_views}</ul>
                </section>
                <section
                    id="mtx-console-panel-chat"
                    role="tabpanel"
                    data-panel="chat"
                    data-panel-visible=chat_visible
                    aria-hidden=chat_hidden
                >
                    <h2>{strings.chat_heading}</h2>
                    <ol id="mtx-console-chat-log" aria-live="polite" data-message-count=message_count>
                        {chat_log}
                    </ol>
                    <form id="mtx-console-chat-form" method="post" action=MTX_CONSOLE_CHAT_SEND_ACTION>
                        <input
                            id="mtx-console-chat-input"
                            name="message"
                            type="text"
                            autocomplete="off"
                            placeholder=strings.chat_placeholder
                            value=state.command_input().to_string()
                        />
                        <button id="mtx-console-chat-send" type="submit">{strings.chat_send}</button>
                    </form>
                    <form id="mtx-console-chat-clear" method="post" action=MTX_CONSOLE_CHAT_CLEAR_ACTION>
                        <button type="submit">{strings.chat_clear}</button>
                    </form>
                </section>
                <section
                    id="mtx-console-panel-settings"
                    role="tabpanel"
                    data-panel="settings"
                    data-panel-visible=settings_visible
                    aria-hidden=settings_hidden
                >
                    <h2>{strings.settings_heading}</h2>
                    <ul id="mtx-console-settings">{setting_rows}</ul>
                    {menu_logout}
                </section>
            </main>
        </div>
    };
    shell.to_html()
}

#[cfg(test)]
mod tests;
