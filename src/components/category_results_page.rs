//! Category Results Page
//!
//! Games for one category, fetched with a growing `pageSize` in stable
//! `id:asc` order and merged through the shared loader so the re-fetched
//! prefix is skipped. Switching category resets the list; a response for a
//! stale request is discarded.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use percent_encoding::percent_decode_str;

use crate::api;
use crate::components::GameCard;
use crate::config::PAGE_STEP;
use crate::latest::LatestSlot;
use crate::store::GameList;

#[component]
pub fn CategoryResultsPage() -> impl IntoView {
    let params = use_params_map();
    let category = Memo::new(move |_| {
        let raw = params.with(|p| p.get("category").unwrap_or_default());
        percent_decode_str(&raw).decode_utf8_lossy().to_string()
    });

    let (list, set_list) = signal(GameList::new());
    let (page_size, set_page_size) = signal(PAGE_STEP);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let slot = StoredValue::new(LatestSlot::default());
    let last_category: StoredValue<Option<String>> = StoredValue::new(None);

    Effect::new(move |_| {
        let name = category.get();
        let size = page_size.get();

        // category switch: drop accumulated state and restart at one page
        if last_category.get_value().as_deref() != Some(name.as_str()) {
            last_category.set_value(Some(name.clone()));
            set_list.set(GameList::new());
            if size != PAGE_STEP {
                // invalidate any in-flight fetch for the old category
                slot.update_value(|s| {
                    s.begin();
                });
                set_page_size.set(PAGE_STEP);
                return;
            }
        }

        let token = slot.try_update_value(|s| s.begin()).unwrap_or_default();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let outcome = api::fetch_by_category(&name, size).await;
            if !slot.try_with_value(|s| s.is_current(token)).unwrap_or(false) {
                return;
            }
            match outcome {
                Ok(page) => set_list.update(|l| l.merge_page(size, size, page)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let on_load_more = move |_| set_page_size.update(|n| *n += PAGE_STEP);

    view! {
        <section class="category-results">
            <div class="grid-header">
                <div>
                    <h2 class="section-title">
                        {move || {
                            let name = category.get();
                            if name.is_empty() { "Category".to_string() } else { name }
                        }}
                    </h2>
                    {move || {
                        list.with(|l| l.total())
                            .map(|total| {
                                view! {
                                    <p class="grid-count">
                                        {move || {
                                            list.with(|l| format!("Showing {} of {} games", l.len(), total))
                                        }}
                                    </p>
                                }
                            })
                    }}
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">"Error: " {e}</div> })}
            {move || {
                (loading.get() && list.with(|l| l.is_empty()))
                    .then(|| view! { <div class="loading">"Loading…"</div> })
            }}

            <ul class="games-grid">
                {move || {
                    list.get()
                        .items()
                        .iter()
                        .cloned()
                        .map(|game| view! { <GameCard game=game/> })
                        .collect_view()
                }}
            </ul>

            <div class="grid-footer">
                <button
                    class="load-more"
                    disabled=move || loading.get() || !list.with(|l| l.has_more())
                    on:click=on_load_more
                >
                    {move || {
                        if loading.get() {
                            "Loading…"
                        } else if list.with(|l| l.has_more()) {
                            "Load More"
                        } else {
                            "No more results"
                        }
                    }}
                </button>
            </div>
        </section>
    }
}
