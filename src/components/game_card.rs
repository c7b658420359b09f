//! Game Card
//!
//! Cover tile shared by the home grid and category results.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Game;

#[component]
pub fn GameCard(game: Game) -> impl IntoView {
    let href = format!("/detail/{}", game.id);
    let rating = format!("{:.1}", game.rating());
    view! {
        <li class="game-card">
            <A href=href>
                <img
                    class="game-card-cover"
                    src=game.image_url.clone().unwrap_or_default()
                    alt=game.name.clone()
                />
                <div class="game-card-name">{game.name.clone()}</div>
                <div class="game-card-rating">
                    <span class="star" aria-hidden="true">"★"</span>
                    <span>{rating}</span>
                </div>
            </A>
        </li>
    }
}
