//! Navbar
//!
//! Sticky top bar: brand link, search typeahead, CSV export.
//!
//! The search box stores the raw input immediately, debounces the actual
//! query, aborts the previous in-flight request when a new one is issued,
//! and re-ranks the returned rows client-side before showing the top 3.
//! Search failures are swallowed here; the panel just closes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use crate::api;
use crate::components::ExportButton;
use crate::config::{SEARCH_DEBOUNCE_MS, SUGGESTION_LIMIT};
use crate::latest::LatestSlot;
use crate::models::Game;
use crate::search;
use leptos_router::components::A;

/// How many rows to pull from the API before local re-ranking
const SEARCH_FETCH_SIZE: u32 = 20;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <nav class="navbar-inner">
                <A href="/" attr:class="brand">
                    "Board"
                    <span class="brand-accent">"Based"</span>
                </A>
                <SearchBox/>
                <ExportButton/>
            </nav>
        </header>
    }
}

#[component]
fn SearchBox() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(Vec::<Game>::new());
    let (open, set_open) = signal(false);
    let (searching, set_searching) = signal(false);

    // A task applies its outcome only while its token is still current.
    let slot = StoredValue::new(LatestSlot::default());
    let controller: StoredValue<Option<AbortController>, LocalStorage> =
        StoredValue::new_local(None);

    let on_input = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        set_query.set(raw.clone());

        let token = slot.try_update_value(|s| s.begin()).unwrap_or_default();
        if let Some(prior) = controller.get_value() {
            prior.abort();
        }
        controller.set_value(None);

        let text = match search::normalize_query(&raw) {
            Some(text) => text,
            None => {
                set_results.set(Vec::new());
                set_open.set(false);
                set_searching.set(false);
                return;
            }
        };

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if !slot.try_with_value(|s| s.is_current(token)).unwrap_or(false) {
                return;
            }

            let ctrl = AbortController::new().ok();
            let signal = ctrl.as_ref().map(|c| c.signal());
            controller.set_value(ctrl);
            set_searching.set(true);

            let outcome = api::search_games(&text, SEARCH_FETCH_SIZE, signal.as_ref()).await;
            if !slot.try_with_value(|s| s.is_current(token)).unwrap_or(false) {
                return;
            }
            set_searching.set(false);
            match outcome {
                Ok(page) => {
                    let top = search::rank_top(&text, page.rows, SUGGESTION_LIMIT);
                    set_open.set(!top.is_empty());
                    set_results.set(top);
                }
                Err(_) => {
                    // search is non-critical, no user-visible error
                    set_results.set(Vec::new());
                    set_open.set(false);
                }
            }
        });
    };

    let close = move || {
        set_open.set(false);
        set_query.set(String::new());
        set_results.set(Vec::new());
    };

    view! {
        <div class="search-box">
            <input
                type="text"
                placeholder="Search"
                autocomplete="off"
                class:is-searching=move || searching.get()
                prop:value=move || query.get()
                on:input=on_input
            />
            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <ul class="search-suggestions">
                                {results
                                    .get()
                                    .into_iter()
                                    .map(|g| {
                                        let href = format!("/detail/{}", g.id);
                                        let rating = format!("{:.1}", g.rating());
                                        view! {
                                            <li on:click=move |_| close()>
                                                <A href=href>
                                                    <span class="suggestion-name">{g.name.clone()}</span>
                                                    <span class="suggestion-rating">{rating}</span>
                                                </A>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                    })
            }}
        </div>
    }
}
