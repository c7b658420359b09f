//! Board Games Grid
//!
//! Paginated home grid over the incremental range loader: twenty games per
//! "load more" click, deduplicated by id, with a display-only name sort.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::GameCard;
use crate::config::PAGE_STEP;
use crate::store::{GameList, SortOrder};

#[component]
pub fn BoardGamesGrid() -> impl IntoView {
    let (list, set_list) = signal(GameList::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (order, set_order) = signal(SortOrder::Api);

    // 1-based inclusive bounds; on failure nothing is merged and the same
    // range can be requested again.
    let load_range = move |start: u32, end: u32| {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_range(start, end).await {
                Ok(page) => {
                    web_sys::console::log_1(
                        &format!("[Grid] {} rows for range {start}-{end}", page.rows.len())
                            .into(),
                    );
                    set_list.update(|l| l.merge_page(end - start + 1, end, page));
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if list.with_untracked(|l| l.is_empty()) {
            load_range(1, PAGE_STEP);
        }
    });

    let on_load_more = move |_| {
        let start = list.with_untracked(|l| l.cursor());
        load_range(start, start + PAGE_STEP - 1);
    };

    view! {
        <section class="games-grid-section">
            <div class="grid-header">
                <div>
                    <h2 class="section-title">"Board Games"</h2>
                    <p class="grid-count">
                        {move || {
                            list.with(|l| match l.total() {
                                Some(total) => format!("Showing {} of {} games", l.shown(), total),
                                None => format!("Showing {} games", l.len()),
                            })
                        }}
                    </p>
                </div>
                <button
                    class="sort-toggle"
                    class:is-active=move || order.get() != SortOrder::Api
                    on:click=move |_| set_order.update(|o| *o = o.next())
                >
                    {move || order.get().label()}
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">"Error: " {e}</div> })}

            <ul class="games-grid">
                {move || {
                    list.get()
                        .display(order.get())
                        .into_iter()
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
