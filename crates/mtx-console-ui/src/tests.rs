use mtx_console_core::{ConsoleLocale, ConsoleSetting, ConsoleState, ConsoleTab};

use super::{render_mtx_console_page, render_mtx_console_shell};

fn logged_in_state(locale: ConsoleLocale) -> ConsoleState {
    let mut state = ConsoleState::new(locale, 200);
    state.set_username("admin");
    state.set_password("secret");
    state.submit_login().expect("login succeeds");
    state
}

#[test]
fn functional_logged_out_state_renders_login_gate_only() {
    let html = render_mtx_console_shell(&ConsoleState::default());
    assert!(html.contains("id=\"mtx-console-login\""));
    assert!(html.contains("id=\"mtx-console-login-form\""));
    assert!(html.contains("action=\"/login\""));
    assert!(html.contains("name=\"username\""));
    assert!(html.contains("name=\"password\""));
    assert!(!html.contains("id=\"mtx-console-shell\""));
    assert!(!html.contains("id=\"mtx-console-login-error\""));
}

#[test]
fn regression_login_gate_shows_validation_error() {
    let mut state = ConsoleState::default();
    state.set_username("admin");
    assert!(state.submit_login().is_err());

    let html = render_mtx_console_shell(&state);
    assert!(html.contains("id=\"mtx-console-login-error\""));
    assert!(html.contains(ConsoleLocale::Arabic.strings().login_missing_credentials));
}

#[test]
fn functional_logged_in_state_renders_shell_with_four_tabs() {
    let html = render_mtx_console_shell(&logged_in_state(ConsoleLocale::English));
    assert!(html.contains("id=\"mtx-console-shell\""));
    assert!(!html.contains("id=\"mtx-console-login-form\""));
    assert_eq!(html.matches("role=\"tab\"").count(), 4);
    assert_eq!(html.matches("role=\"tabpanel\"").count(), 4);
    assert!(html.contains("data-active-tab=\"dashboard\""));
}

#[test]
fn regression_shell_background_video_loops_muted() {
    let html = render_mtx_console_shell(&logged_in_state(ConsoleLocale::English));
    assert!(html.contains(
        "<video id=\"mtx-console-bg-video\" autoplay=\"autoplay\" muted=\"muted\" loop=\"loop\">"
    ));
    assert!(html.contains("src=\"/mtx-bg.mp4\""));
}

#[test]
fn conformance_each_tab_makes_exactly_its_panel_visible() {
    for tab in ConsoleTab::ALL {
        let mut state = logged_in_state(ConsoleLocale::English);
        state.select_tab(tab);
        let html = render_mtx_console_shell(&state);

        assert_eq!(html.matches("data-panel-visible=\"true\"").count(), 1);
        assert_eq!(html.matches("data-panel-visible=\"false\"").count(), 3);
        let panel_marker = format!(
            "data-panel=\"{}\" data-panel-visible=\"true\"",
            tab.as_str()
        );
        assert!(html.contains(&panel_marker), "missing {panel_marker}");
        assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
        let tab_marker = format!("data-tab=\"{}\" aria-selected=\"true\"", tab.as_str());
        assert!(html.contains(&tab_marker), "missing {tab_marker}");
    }
}

#[test]
fn functional_dashboard_panel_renders_stat_cards_and_activity() {
    let html = render_mtx_console_shell(&logged_in_state(ConsoleLocale::English));
    assert_eq!(html.matches("data-component=\"StatCard\"").count(), 4);
    assert!(html.contains("id=\"mtx-console-stat-users\""));
    assert!(html.contains("1,234"));
    assert!(html.contains("data-change-tone=\"improving\""));
    assert_eq!(html.matches("class=\"mtx-activity-entry\"").count(), 4);
}

#[test]
fn functional_commands_panel_lists_reference_commands() {
    let html = render_mtx_console_shell(&logged_in_state(ConsoleLocale::Arabic));
    assert_eq!(html.matches("class=\"mtx-command-card\"").count(), 6);
    for name in ["/broadcast", "/ban", "/unban", "/mute", "/unmute", "/warn"] {
        let marker = format!("data-command=\"{name}\"");
        assert!(html.contains(&marker), "missing {marker}");
    }
}

#[test]
fn functional_chat_panel_renders_messages_in_order_with_kinds() {
    let mut state = logged_in_state(ConsoleLocale::English);
    state.select_tab(ConsoleTab::Chat);
    state.set_command_input("/status");
    state.send_command(0);
    state.deliver_due(200);

    let html = render_mtx_console_shell(&state);
    assert!(html.contains("data-message-count=\"3\""));
    assert!(!html.contains("id=\"mtx-console-chat-empty\""));
    let system_at = html
        .find("data-message-kind=\"system\"")
        .expect("system message");
    let command_at = html
        .find("data-message-kind=\"command\"")
        .expect("command message");
    let response_at = html
        .find("data-message-kind=\"response\"")
        .expect("response message");
    assert!(system_at < command_at && command_at < response_at);
    assert!(html.contains(ConsoleLocale::English.strings().status_response));
}

#[test]
fn regression_empty_chat_renders_placeholder() {
    let mut state = logged_in_state(ConsoleLocale::English);
    state.set_command_input("/clear");
    state.send_command(0);

    let html = render_mtx_console_shell(&state);
    assert!(html.contains("id=\"mtx-console-chat-empty\""));
    assert!(html.contains("data-message-count=\"0\""));
}

#[test]
fn regression_chat_text_is_html_escaped() {
    let mut state = logged_in_state(ConsoleLocale::English);
    state.set_command_input("<script>alert(1)</script>");
    state.send_command(0);

    let html = render_mtx_console_shell(&state);
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn functional_settings_panel_reflects_toggle_state() {
    let mut state = logged_in_state(ConsoleLocale::English);
    state.toggle_setting(ConsoleSetting::DarkMode);

    let html = render_mtx_console_shell(&state);
    assert!(html.contains("data-setting=\"notifications\" data-enabled=\"true\""));
    assert!(html.contains("data-setting=\"dark-mode\" data-enabled=\"false\""));
    assert!(html.contains("data-setting=\"activity-logging\" data-enabled=\"true\""));
}

#[test]
fn functional_settings_logout_button_only_with_open_menu() {
    let mut state = logged_in_state(ConsoleLocale::English);
    let closed = render_mtx_console_shell(&state);
    assert!(!closed.contains("id=\"mtx-console-menu-logout\""));
    assert!(closed.contains("data-mobile-menu-open=\"false\""));

    state.toggle_mobile_menu();
    let open = render_mtx_console_shell(&state);
    assert!(open.contains("id=\"mtx-console-menu-logout\""));
    assert!(open.contains("data-mobile-menu-open=\"true\""));
}

#[test]
fn functional_page_document_sets_language_and_direction() {
    let arabic = render_mtx_console_page(&ConsoleState::default());
    assert!(arabic.starts_with("<!DOCTYPE html>"));
    assert!(arabic.contains("<html lang=\"ar\" dir=\"rtl\">"));
    assert!(arabic.contains("<title>MTX SX TEAM Bot</title>"));

    let english = render_mtx_console_page(&ConsoleState::new(ConsoleLocale::English, 200));
    assert!(english.contains("<html lang=\"en\" dir=\"ltr\">"));
    assert!(english.contains("id=\"mtx-console-login\""));
}

#[test]
fn integration_logout_returns_to_login_gate() {
    let mut state = logged_in_state(ConsoleLocale::English);
    state.select_tab(ConsoleTab::Settings);
    state.logout();

    let html = render_mtx_console_shell(&state);
    assert!(html.contains("id=\"mtx-console-login\""));
    assert!(!html.contains("id=\"mtx-console-shell\""));
}
