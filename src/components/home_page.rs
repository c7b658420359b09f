//! Home Page
//!
//! Hero, category teaser, recommendations, paginated grid.

use leptos::prelude::*;

use crate::components::{BoardGamesGrid, CategorySection, HomeHero, RecommendedGames};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <HomeHero/>
            <CategorySection/>
            <RecommendedGames/>
            <BoardGamesGrid/>
        </div>
    }
}
