use std::time::{Duration, Instant};

use crate::error::AuthError;
use crate::oauth::{self, Pkce};
use crate::token::OAuthToken;

const LOOPBACK_HOST: &str = "127.0.0.1";

/// Parameters of a completed redirect to `/callback`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Callback {
    Code { code: String, state: Option<String> },
    Denied(String),
    /// Neither a code nor an error; keep waiting.
    Incomplete,
}

/// Execute the browser-based Google consent flow.
///
/// 1. Start `tiny_http` on `127.0.0.1:0` (random port)
/// 2. Open the browser to Google's consent page with a loopback redirect
/// 3. Wait for the callback carrying the authorization code
///    (in `spawn_blocking`, `tiny_http::recv` blocks)
/// 4. Exchange the code for tokens with the PKCE verifier
///
/// # Errors
///
/// Returns `AuthError::BrowserFlowFailed` if the server cannot bind, the user
/// denies consent, the state does not match, or the callback times out.
/// Returns `AuthError::TokenExchange` if Google rejects the code.
pub async fn login(
    http: &reqwest::Client,
    client_id: &str,
    client_secret: &str,
    scope: &str,
    timeout: Duration,
) -> Result<OAuthToken, AuthError> {
    let server = tiny_http::Server::http(format!("{LOOPBACK_HOST}:0"))
        .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to bind: {e}")))?;
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .ok_or_else(|| AuthError::BrowserFlowFailed("no port".into()))?;

    let mut nonce_bytes = [0u8; 16];
    getrandom::fill(&mut nonce_bytes)
        .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to generate CSRF nonce: {e}")))?;
    let state: String = nonce_bytes.iter().map(|b| format!("{b:02x}")).collect();
    let pkce = Pkce::generate()?;

    let redirect_uri = format!("http://{LOOPBACK_HOST}:{port}/callback");
    let consent_url =
        oauth::authorization_url(client_id, &redirect_uri, scope, &state, &pkce.challenge);

    eprintln!("Opening browser to: {consent_url}");
    if let Err(error) = open::that(&consent_url) {
        eprintln!("Failed to open browser: {error}");
        eprintln!("Open the URL above manually, then return here.");
    }

    let code = tokio::task::spawn_blocking(move || wait_for_callback(&server, timeout, &state))
        .await
        .map_err(|e| AuthError::BrowserFlowFailed(format!("spawn_blocking join: {e}")))??;

    oauth::exchange_code(http, client_id, client_secret, &code, &redirect_uri, &pkce.verifier)
        .await
}

/// Pull `code`, `state`, and `error` out of a callback query string.
pub(crate) fn parse_callback_query(query: &str) -> Result<Callback, AuthError> {
    let mut code = None;
    let mut state = None;
    let mut error = None;
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = urlencoding::decode(&value.replace('+', " "))
            .map_err(|e| AuthError::BrowserFlowFailed(format!("URL decode: {e}")))?
            .into_owned();
        match key {
            "code" => code = Some(value),
            "state" => state = Some(value),
            "error" => error = Some(value),
            _ => {}
        }
    }

    Ok(match (code, error) {
        (_, Some(error)) => Callback::Denied(error),
        (Some(code), None) => Callback::Code { code, state },
        (None, None) => Callback::Incomplete,
    })
}

fn html_response(
    status: u16,
    title: &str,
    message: &str,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = format!("<html><body><h1>{title}</h1><p>{message}</p></body></html>");
    let response = tiny_http::Response::from_string(body).with_status_code(status);
    match tiny_http::Header::from_bytes("Content-Type", "text/html; charset=utf-8") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

/// Block until the callback server receives the authorization redirect.
///
/// Loops on `recv_timeout()`, ignoring requests that are not `/callback?...`
/// (favicon, preflight, user refreshes).
fn wait_for_callback(
    server: &tiny_http::Server,
    timeout: Duration,
    expected_state: &str,
) -> Result<String, AuthError> {
    let deadline = Instant::now() + timeout;
    let timed_out = || {
        AuthError::BrowserFlowFailed(format!(
            "browser callback timed out after {}s",
            timeout.as_secs()
        ))
    };

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(timed_out());
        }

        let request = match server.recv_timeout(remaining) {
            Ok(Some(req)) => req,
            Ok(None) => return Err(timed_out()),
            Err(e) => return Err(AuthError::BrowserFlowFailed(format!("recv error: {e}"))),
        };

        let url = request.url().to_string();
        let Some(query) = url.strip_prefix("/callback?") else {
            let _ = request.respond(tiny_http::Response::from_string("").with_status_code(204));
            continue;
        };

        match parse_callback_query(query)? {
            Callback::Denied(reason) => {
                let _ = request.respond(html_response(
                    400,
                    "Sign-in cancelled",
                    "Google did not grant access. Check the terminal.",
                ));
                return Err(AuthError::BrowserFlowFailed(format!("consent denied: {reason}")));
            }
            Callback::Code { code, state } => {
                if state.as_deref() != Some(expected_state) {
                    let _ = request.respond(html_response(
                        400,
                        "Sign-in failed",
                        "State mismatch. Check the terminal.",
                    ));
                    return Err(AuthError::BrowserFlowFailed(
                        "state mismatch, possible CSRF".into(),
                    ));
                }
                let _ = request.respond(html_response(
                    200,
                    "Signed in",
                    "You can close this tab and return to the portal.",
                ));
                return Ok(code);
            }
            Callback::Incomplete => {
                let _ = request.respond(html_response(
                    200,
                    "Waiting for Google",
                    "Redirecting, please wait.",
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_code_and_state() {
        let callback = parse_callback_query("state=abc123&code=4%2F0AX-yz&scope=openid").unwrap();
        assert_eq!(
            callback,
            Callback::Code {
                code: "4/0AX-yz".into(),
                state: Some("abc123".into()),
            }
        );
    }

    #[test]
    fn error_wins_over_code() {
        let callback = parse_callback_query("error=access_denied&state=abc").unwrap();
        assert_eq!(callback, Callback::Denied("access_denied".into()));
    }

    #[test]
    fn missing_code_is_incomplete() {
        assert_eq!(parse_callback_query("state=abc").unwrap(), Callback::Incomplete);
        assert_eq!(parse_callback_query("").unwrap(), Callback::Incomplete);
    }

    #[test]
    fn plus_decodes_to_space() {
        let callback = parse_callback_query("code=a&scope=x+y&state=s").unwrap();
        assert!(matches!(callback, Callback::Code { .. }));
    }

    #[test]
    fn callback_times_out_without_requests() {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let err = wait_for_callback(&server, Duration::from_millis(50), "s").unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }
}
