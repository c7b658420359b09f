//! UI Components
//!
//! Leptos view components for the catalog.

mod board_games_grid;
mod category_page;
mod category_results_page;
mod category_section;
mod detail_page;
mod export_button;
mod gallery;
mod game_card;
mod home_hero;
mod home_page;
mod navbar;
mod recommended_games;

pub use board_games_grid::BoardGamesGrid;
pub use category_page::CategoryPage;
pub use category_results_page::CategoryResultsPage;
pub use category_section::CategorySection;
pub use detail_page::DetailPage;
pub use export_button::ExportButton;
pub use gallery::Gallery;
pub use game_card::GameCard;
pub use home_hero::HomeHero;
pub use home_page::HomePage;
pub use navbar::Navbar;
pub use recommended_games::RecommendedGames;
