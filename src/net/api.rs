//! REST helper for the login form's single fetch.
//!
//! Client-side (csr): real HTTP call via `gloo-net`.
//! Native builds: stub returning an error since the endpoint is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The caller gets a `Result` with the failure stringified as-is; the form
//! stores it untouched and only ever uses its presence.

#![allow(clippy::unused_async)]

use super::types::User;

/// Endpoint hit by every submit. Fixed and unparameterized — the form's
/// credentials are never transmitted.
pub const USER_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users/1";

/// Fetch the demo user record from [`USER_ENDPOINT`].
///
/// # Errors
///
/// Returns the stringified failure when the request, a non-2xx status, or
/// the JSON decode fails.
pub async fn fetch_user() -> Result<User, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(USER_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("request failed: {}", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available off the browser".to_owned())
    }
}
