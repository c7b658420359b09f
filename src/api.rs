//! Catalog API Wrappers
//!
//! Thin `fetch` bindings to the board-game API. Every wrapper returns
//! `Result<T, String>` with the raw failure text; callers turn that into
//! local view state.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestCache, RequestInit, Response};

use crate::config::API_BASE;
use crate::models::{GameDetail, GamesPage};

/// encodeURIComponent-equivalent set: everything but ASCII alphanumerics
/// and `- _ . ! ~ * ' ( )`
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn js_err(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

async fn get_response(
    url: &str,
    signal: Option<&AbortSignal>,
    no_store: bool,
) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_signal(signal);
    if no_store {
        opts.set_cache(RequestCache::NoStore);
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = value
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(resp)
}

async fn get_text(url: &str, signal: Option<&AbortSignal>, no_store: bool) -> Result<String, String> {
    let resp = get_response(url, signal, no_store).await?;
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    text.as_string()
        .ok_or_else(|| "response body is not text".to_string())
}

/// Fetch a list endpoint and decode the `{ total?, rows }` envelope,
/// tolerating a bare-array body.
async fn get_page(url: &str, signal: Option<&AbortSignal>) -> Result<GamesPage, String> {
    let body = get_text(url, signal, false).await?;
    let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| e.to_string())?;
    GamesPage::from_json(value)
}

/// `GET /board-games?range={start}-{end}` (1-based inclusive bounds)
pub async fn fetch_range(start: u32, end: u32) -> Result<GamesPage, String> {
    get_page(
        &format!("{API_BASE}/board-games?range={start}-{end}"),
        None,
    )
    .await
}

/// `GET /board-games?pageSize={n}` — first n games in API order
pub async fn fetch_page(page_size: u32) -> Result<GamesPage, String> {
    get_page(&format!("{API_BASE}/board-games?pageSize={page_size}"), None).await
}

/// `GET /board-games?pageSize={n}&category={name}&sort=id:asc`
pub async fn fetch_by_category(category: &str, page_size: u32) -> Result<GamesPage, String> {
    let encoded = utf8_percent_encode(category, COMPONENT);
    get_page(
        &format!("{API_BASE}/board-games?pageSize={page_size}&category={encoded}&sort=id:asc"),
        None,
    )
    .await
}

/// `GET /board-games?q={query}&pageSize={n}`, abortable
pub async fn search_games(
    query: &str,
    page_size: u32,
    signal: Option<&AbortSignal>,
) -> Result<GamesPage, String> {
    let encoded = utf8_percent_encode(query, COMPONENT);
    get_page(
        &format!("{API_BASE}/board-games?q={encoded}&pageSize={page_size}"),
        signal,
    )
    .await
}

/// `GET /board-games/{id}` — extended record
pub async fn fetch_game(id: u32) -> Result<GameDetail, String> {
    let resp = get_response(&format!("{API_BASE}/board-games/{id}"), None, false).await?;
    let json = JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Count estimate for the CSV export confirmation (`pageSize=1`, read `total`)
pub async fn fetch_total_estimate() -> Result<u64, String> {
    let page = fetch_page(1).await?;
    page.total.ok_or_else(|| "total not reported".to_string())
}

/// Download URL for the name-per-line CSV export
pub fn export_csv_url() -> String {
    format!("{API_BASE}/board-games/export.csv")
}

/// Fetch the static category CSV, bypassing the HTTP cache
pub async fn fetch_category_csv(url: &str) -> Result<String, String> {
    get_text(url, None, true).await
}
