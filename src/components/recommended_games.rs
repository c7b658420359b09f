//! Recommended Games
//!
//! Numbered selector list plus a featured showcase for the active pick.
//! Fetches the first ten games once on mount; errors leave the panel empty.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::models::Game;
use crate::text;

const FEATURED_COUNT: u32 = 10;
const DESCRIPTION_CHARS: usize = 180;

fn range_label(min: Option<i32>, max: Option<i32>) -> String {
    let lo = min.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
    let hi = max.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
    format!("{lo}–{hi}")
}

fn minutes_label(min: Option<i32>, max: Option<i32>) -> String {
    match (min, max) {
        (None, None) => "-".to_string(),
        (lo, Some(hi)) => format!(
            "{}–{hi}",
            lo.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
        ),
        (Some(lo), None) => lo.to_string(),
    }
}

fn ages_label(age_plus: Option<i32>) -> String {
    match age_plus {
        Some(age) => format!("{age}+"),
        None => "-".to_string(),
    }
}

#[component]
pub fn RecommendedGames() -> impl IntoView {
    let (games, set_games) = signal(Vec::<Game>::new());
    let (active, set_active) = signal(0usize);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_page(FEATURED_COUNT).await {
                Ok(page) => set_games.set(page.rows),
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("[Recommended] load failed: {e}").into(),
                    );
                    set_games.set(Vec::new());
                }
            }
        });
    });

    let featured = move || games.with(|g| g.get(active.get()).cloned());

    view! {
        <section class="recommended">
            <h2 class="section-title">"Recommended Games"</h2>
            <div class="recommended-layout">
                <div class="recommended-list">
                    {move || {
                        games
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(idx, game)| {
                                view! {
                                    <button
                                        class="recommended-entry"
                                        class:is-active=move || active.get() == idx
                                        on:click=move |_| set_active.set(idx)
                                    >
                                        <img
                                            src=game.image_url.clone().unwrap_or_default()
                                            alt=game.name.clone()
                                            loading="lazy"
                                        />
                                        <span class="entry-number">{idx + 1}</span>
                                        <span class="entry-name">{game.name.clone()}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="recommended-featured">
                    {move || {
                        featured()
                            .map(|g| {
                                let href = format!("/detail/{}", g.id);
                                let description = g
                                    .description
                                    .as_deref()
                                    .map(|d| text::truncate(d, DESCRIPTION_CHARS));
                                view! {
                                    <div class="featured-card">
                                        <img
                                            class="featured-backdrop"
                                            src=g.image_url.clone().unwrap_or_default()
                                            alt=g.name.clone()
                                        />
                                        <div class="featured-number">{active.get() + 1}</div>
                                        <h3 class="featured-name">{g.name.clone()}</h3>
                                        {description
                                            .map(|d| view! { <p class="featured-description">{d}</p> })}
                                        <div class="featured-stats">
                                            <div>
                                                <span class="stat-value">
                                                    {range_label(g.players_min, g.players_max)}
                                                </span>
                                                <span class="stat-label">"Players"</span>
                                            </div>
                                            <div>
                                                <span class="stat-value">
                                                    {minutes_label(g.time_min, g.time_max)}
                                                </span>
                                                <span class="stat-label">"Minutes"</span>
                                            </div>
                                            <div>
                                                <span class="stat-value">{ages_label(g.age_plus)}</span>
                                                <span class="stat-label">"Ages"</span>
                                            </div>
                                        </div>
                                        <A href=href attr:class="featured-link">
                                            "More Details"
                                        </A>
                                        <div class="featured-rating">
                                            <span class="star" aria-hidden="true">"★"</span>
                                            <span>{format!("{:.1}", g.rating())}</span>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_labels_use_dash_placeholders() {
        assert_eq!(range_label(Some(2), Some(4)), "2–4");
        assert_eq!(range_label(None, Some(4)), "-–4");
        assert_eq!(range_label(None, None), "-–-");

        assert_eq!(minutes_label(Some(30), Some(60)), "30–60");
        assert_eq!(minutes_label(Some(30), None), "30");
        assert_eq!(minutes_label(None, None), "-");

        assert_eq!(ages_label(Some(10)), "10+");
        assert_eq!(ages_label(None), "-");
    }
}
