//! BoardBased Frontend App
//!
//! Router shell: sticky navbar over the routed pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{CategoryPage, CategoryResultsPage, DetailPage, HomePage, Navbar};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-shell">
                <Navbar/>
                <main class="main-content">
                    <Routes fallback=|| view! { <div class="error">"Page not found."</div> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/category") view=CategoryPage/>
                        <Route path=path!("/category/:category") view=CategoryResultsPage/>
                        <Route path=path!("/detail/:id") view=DetailPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
