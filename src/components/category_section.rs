//! Category Teaser
//!
//! Static four-tile strip on the home page linking into the category index.

use leptos::prelude::*;
use leptos_router::components::A;

const CATS: [(&str, &str); 4] = [
    ("Adventure", "/home/category/adventure.png"),
    ("Bluffing", "/home/category/bluffing.png"),
    ("Party Games", "/home/category/party.png"),
    ("Puzzle", "/home/category/puzzle.png"),
];

#[component]
pub fn CategorySection() -> impl IntoView {
    view! {
        <section class="category-section">
            <h2 class="section-title">"Categories"</h2>
            <div class="category-tiles">
                {CATS
                    .iter()
                    .map(|(name, img)| {
                        view! {
                            <A href="/category" attr:class="category-tile">
                                <img src=*img alt=*name/>
                                <h3>{*name}</h3>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="category-more">
                <A href="/category">"View More →"</A>
            </div>
        </section>
    }
}
