//! Detail Page
//!
//! Extended record for one game: gallery, credits, entity-decoded
//! description, official link. Refetches when the route id changes and
//! drops responses for a superseded id.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::Gallery;
use crate::latest::LatestSlot;
use crate::models::GameDetail;

/// Decode `&amp;`-style entities the way a browser would, via a detached
/// textarea. Falls back to the raw text outside a document.
fn decode_html_entities(input: &str) -> String {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return input.to_string();
    };
    let Ok(element) = document.create_element("textarea") else {
        return input.to_string();
    };
    element.set_inner_html(input);
    element
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .map(|t| t.value())
        .unwrap_or_else(|_| input.to_string())
}

fn join_or_dash(parts: &[String]) -> String {
    if parts.is_empty() {
        "—".to_string()
    } else {
        parts.join(", ")
    }
}

#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()))
    });

    let (game, set_game) = signal(Option::<GameDetail>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let slot = StoredValue::new(LatestSlot::default());

    Effect::new(move |_| {
        let token = slot.try_update_value(|s| s.begin()).unwrap_or_default();

        let Some(id) = id.get() else {
            set_error.set(Some("invalid game id".to_string()));
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let outcome = api::fetch_game(id).await;
            if !slot.try_with_value(|s| s.is_current(token)).unwrap_or(false) {
                return;
            }
            match outcome {
                Ok(detail) => set_game.set(Some(detail)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="detail-page">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="detail-skeleton">
                            <div class="skeleton skeleton-title"></div>
                            <div class="skeleton skeleton-big"></div>
                            <div class="skeleton skeleton-block"></div>
                        </div>
                    }
                        .into_any();
                }
                if let Some(err) = error.get() {
                    let id_text = id
                        .get()
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| "?".to_string());
                    return view! {
                        <div class="error">
                            {format!("Failed to load board game (id: {id_text}). {err}")}
                        </div>
                    }
                        .into_any();
                }
                match game.get() {
                    Some(detail) => detail_view(detail).into_any(),
                    None => view! { <div class="error">"No data."</div> }.into_any(),
                }
            }}
        </div>
    }
}

fn detail_view(game: GameDetail) -> impl IntoView {
    let year = game.year_published.map(|y| format!("({y})"));
    let rating = if game.average_rating.is_some() {
        format!("{:.1}", game.rating())
    } else {
        "—".to_string()
    };
    let alternate_names = join_or_dash(&game.alternate_names);
    let designers = join_or_dash(&game.designers);
    let artists = join_or_dash(&game.artists);
    let publishers = join_or_dash(&game.publishers);
    let description = decode_html_entities(game.description.as_deref().unwrap_or_default());
    let category = game
        .category
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "—".to_string());

    view! {
        <div class="detail-layout">
            <Gallery images=game.gallery() alt_base=game.name.clone()/>

            <div class="detail-summary">
                <div class="detail-title-row">
                    <h1 class="detail-title">{game.name.clone()}</h1>
                    {year.map(|y| view! { <span class="detail-year">{y}</span> })}
                </div>
                <p class="detail-category">{category}</p>
                <div class="detail-rating">
                    <span class="rating-label">"Ratings:"</span>
                    <span class="star" aria-hidden="true">"★"</span>
                    <span class="rating-value">{rating}</span>
                </div>
                <dl class="detail-credits">
                    <div>
                        <dt>"Alternate Names:"</dt>
                        <dd>{alternate_names}</dd>
                    </div>
                    <div>
                        <dt>"Designer:"</dt>
                        <dd>{designers}</dd>
                    </div>
                    <div>
                        <dt>"Artist:"</dt>
                        <dd>{artists}</dd>
                    </div>
                    <div>
                        <dt>"Publisher:"</dt>
                        <dd>{publishers}</dd>
                    </div>
                </dl>
            </div>
        </div>

        <section class="detail-section">
            <h2>"Description"</h2>
            <p class="detail-description">{description}</p>
        </section>

        {game
            .url
            .clone()
            .filter(|u| !u.is_empty())
            .map(|url| {
                view! {
                    <section class="detail-section">
                        <h2>"Official Links"</h2>
                        <a href=url.clone() target="_blank" rel="noopener noreferrer">
                            {url.clone()}
                        </a>
                    </section>
                }
            })}
    }
}
