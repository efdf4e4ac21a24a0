//! Local HTTP host for the console page. Form posts stand in for browser
//! events and redirect back to the page.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use mtx_console_core::{ConsoleRuntime, ConsoleSetting, ConsoleTab};
use mtx_console_ui::{
    render_mtx_console_page, MTX_CONSOLE_CHAT_CLEAR_ACTION, MTX_CONSOLE_CHAT_SEND_ACTION,
    MTX_CONSOLE_LOGIN_ACTION, MTX_CONSOLE_LOGOUT_ACTION, MTX_CONSOLE_MENU_ACTION,
    MTX_CONSOLE_PAGE_PATH, MTX_CONSOLE_SETTINGS_ACTION, MTX_CONSOLE_TAB_ACTION,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::console_config::ConsoleConfig;

pub(crate) const HEALTHZ_ENDPOINT: &str = "/healthz";

#[derive(Debug, Deserialize, Default)]
struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Deserialize, Default)]
struct TabForm {
    #[serde(default)]
    tab: String,
}

#[derive(Debug, Deserialize, Default)]
struct ChatSendForm {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize, Default)]
struct SettingForm {
    #[serde(default)]
    setting: String,
}

fn back_to_page() -> Response {
    Redirect::to(MTX_CONSOLE_PAGE_PATH).into_response()
}

pub(crate) fn build_console_router(runtime: ConsoleRuntime) -> Router {
    Router::new()
        .route(MTX_CONSOLE_PAGE_PATH, get(handle_console_page))
        .route(MTX_CONSOLE_LOGIN_ACTION, post(handle_login))
        .route(MTX_CONSOLE_LOGOUT_ACTION, post(handle_logout))
        .route(MTX_CONSOLE_TAB_ACTION, post(handle_select_tab))
        .route(MTX_CONSOLE_MENU_ACTION, post(handle_toggle_menu))
        .route(MTX_CONSOLE_CHAT_SEND_ACTION, post(handle_chat_send))
        .route(MTX_CONSOLE_CHAT_CLEAR_ACTION, post(handle_chat_clear))
        .route(MTX_CONSOLE_SETTINGS_ACTION, post(handle_toggle_setting))
        .route(HEALTHZ_ENDPOINT, get(handle_healthz))
        .with_state(runtime)
}

pub(crate) async fn run_console_page_host(
    config: &ConsoleConfig,
    runtime: ConsoleRuntime,
) -> Result<()> {
    let bind_addr = config
        .bind
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid --bind '{}'", config.bind))?;
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind console page host on {bind_addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve bound console page host address")?;

    println!(
        "mtx console listening: addr={} locale={} response_delay_ms={}",
        local_addr, config.locale, config.response_delay_ms
    );
    info!(%local_addr, "console page host started");

    let app = build_console_router(runtime);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("console page host exited unexpectedly")?;
    Ok(())
}

async fn handle_console_page(State(runtime): State<ConsoleRuntime>) -> Html<String> {
    runtime.deliver_due().await;
    let state = runtime.snapshot().await;
    Html(render_mtx_console_page(&state))
}

async fn handle_login(
    State(runtime): State<ConsoleRuntime>,
    Form(form): Form<LoginForm>,
) -> Response {
    if let Err(error) = runtime.login(form.username, form.password).await {
        info!(%error, "login form rejected");
    }
    back_to_page()
}

async fn handle_logout(State(runtime): State<ConsoleRuntime>) -> Response {
    runtime.update(|state| state.logout()).await;
    back_to_page()
}

async fn handle_select_tab(
    State(runtime): State<ConsoleRuntime>,
    Form(form): Form<TabForm>,
) -> Response {
    match form.tab.parse::<ConsoleTab>() {
        Ok(tab) => {
            runtime.update(|state| state.select_tab(tab)).await;
            back_to_page()
        }
        Err(error) => {
            warn!(%error, "tab form rejected");
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
    }
}

async fn handle_toggle_menu(State(runtime): State<ConsoleRuntime>) -> Response {
    runtime.update(|state| state.toggle_mobile_menu()).await;
    back_to_page()
}

async fn handle_chat_send(
    State(runtime): State<ConsoleRuntime>,
    Form(form): Form<ChatSendForm>,
) -> Response {
    runtime.send_command(form.message).await;
    back_to_page()
}

async fn handle_chat_clear(State(runtime): State<ConsoleRuntime>) -> Response {
    runtime.update(|state| state.clear_chat()).await;
    back_to_page()
}

async fn handle_toggle_setting(
    State(runtime): State<ConsoleRuntime>,
    Form(form): Form<SettingForm>,
) -> Response {
    match form.setting.parse::<ConsoleSetting>() {
        Ok(setting) => {
            runtime.update(|state| state.toggle_setting(setting)).await;
            back_to_page()
        }
        Err(error) => {
            warn!(%error, "settings form rejected");
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
    }
}

async fn handle_healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use mtx_console_core::{ConsoleLocale, ConsoleRuntime, ConsoleState, ConsoleTab};
    use tokio::net::TcpListener;

    use super::build_console_router;

    async fn spawn_test_server(
        runtime: ConsoleRuntime,
    ) -> Result<(SocketAddr, tokio::task::JoinHandle<()>)> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind ephemeral listener")?;
        let addr = listener.local_addr().context("resolve listener addr")?;
        let app = build_console_router(runtime);
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok((addr, handle))
    }

    fn english_runtime(delay_ms: u64) -> ConsoleRuntime {
        ConsoleRuntime::new(ConsoleState::new(ConsoleLocale::English, delay_ms))
    }

    async fn post_form(
        client: &reqwest::Client,
        addr: SocketAddr,
        path: &str,
        form: &[(&str, &str)],
    ) -> reqwest::Response {
        client
            .post(format!("http://{addr}{path}"))
            .form(form)
            .send()
            .await
            .expect("post form")
    }

    #[tokio::test]
    async fn functional_page_host_serves_login_gate_and_healthz() {
        let (addr, handle) = spawn_test_server(english_runtime(10)).await.expect("server");
        let client = reqwest::Client::new();

        let page = client
            .get(format!("http://{addr}/"))
            .send()
            .await
            .expect("get page");
        assert_eq!(page.status(), reqwest::StatusCode::OK);
        let body = page.text().await.expect("page body");
        assert!(body.contains("id=\"mtx-console-login-form\""));

        let health = client
            .get(format!("http://{addr}/healthz"))
            .send()
            .await
            .expect("get healthz");
        assert_eq!(health.text().await.expect("health body"), "ok");
        handle.abort();
    }

    #[tokio::test]
    async fn integration_login_send_and_logout_round_trip_through_forms() {
        let runtime = english_runtime(10);
        let (addr, handle) = spawn_test_server(runtime.clone()).await.expect("server");
        let client = reqwest::Client::new();

        let rejected = post_form(&client, addr, "/login", &[("username", "admin")]).await;
        let body = rejected.text().await.expect("body");
        assert!(body.contains("id=\"mtx-console-login-error\""));

        let accepted = post_form(
            &client,
            addr,
            "/login",
            &[("username", "admin"), ("password", "secret")],
        )
        .await;
        let body = accepted.text().await.expect("body");
        assert!(body.contains("id=\"mtx-console-shell\""));

        post_form(&client, addr, "/tab", &[("tab", "chat")]).await;
        post_form(&client, addr, "/chat/send", &[("message", "/status")]).await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        let page = client
            .get(format!("http://{addr}/"))
            .send()
            .await
            .expect("get page")
            .text()
            .await
            .expect("page body");
        assert!(page.contains("data-active-tab=\"chat\""));
        assert!(page.contains(ConsoleLocale::English.strings().status_response));

        let logged_out = post_form(&client, addr, "/logout", &[]).await;
        let body = logged_out.text().await.expect("body");
        assert!(body.contains("id=\"mtx-console-login\""));

        let state = runtime.snapshot().await;
        assert!(state.messages().is_empty());
        assert_eq!(state.active_tab(), ConsoleTab::Dashboard);
        handle.abort();
    }

    #[tokio::test]
    async fn regression_unknown_tab_and_setting_are_bad_requests() {
        let (addr, handle) = spawn_test_server(english_runtime(10)).await.expect("server");
        let client = reqwest::Client::new();

        let tab = post_form(&client, addr, "/tab", &[("tab", "profile")]).await;
        assert_eq!(tab.status(), reqwest::StatusCode::BAD_REQUEST);

        let setting = post_form(&client, addr, "/settings", &[("setting", "sound")]).await;
        assert_eq!(setting.status(), reqwest::StatusCode::BAD_REQUEST);
        handle.abort();
    }

    #[tokio::test]
    async fn functional_menu_settings_and_clear_actions_update_state() {
        let runtime = english_runtime(10);
        runtime.login("admin", "secret").await.expect("login");
        let (addr, handle) = spawn_test_server(runtime.clone()).await.expect("server");
        let client = reqwest::Client::new();

        post_form(&client, addr, "/menu", &[]).await;
        post_form(&client, addr, "/settings", &[("setting", "notifications")]).await;
        post_form(&client, addr, "/chat/clear", &[]).await;

        let state = runtime.snapshot().await;
        assert!(state.is_mobile_menu_open());
        assert!(!state.settings().notifications);
        assert_eq!(state.messages().len(), 1);
        assert_eq!(
            state.messages()[0].text,
            ConsoleLocale::English.strings().chat_cleared
        );
        handle.abort();
    }
}
