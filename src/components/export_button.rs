//! CSV Export Button
//!
//! Fetches a count estimate, confirms with the user, then navigates to the
//! export endpoint to trigger the download.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

#[component]
pub fn ExportButton() -> impl IntoView {
    let (busy, set_busy) = signal(false);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::fetch_total_estimate().await {
                Ok(total) => {
                    if let Some(window) = web_sys::window() {
                        let message = format!("Export {total} game names to CSV?");
                        if window.confirm_with_message(&message).unwrap_or(false) {
                            let _ = window.location().set_href(&api::export_csv_url());
                        }
                    }
                }
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("[Export] count estimate failed: {e}").into(),
                    );
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <button class="export-button" disabled=move || busy.get() on:click=on_click>
            {move || if busy.get() { "Preparing…" } else { "Export CSV" }}
        </button>
    }
}
