//! Home Hero Carousel
//!
//! Five static slides auto-advancing every 4 s, with dot navigation.

use std::time::Duration;

use leptos::prelude::*;

const SLIDES: [(&str, &str); 5] = [
    ("/home/hero/1.png", "Hero 1"),
    ("/home/hero/2.png", "Hero 2"),
    ("/home/hero/3.png", "Hero 3"),
    ("/home/hero/4.png", "Hero 4"),
    ("/home/hero/5.png", "Hero 5"),
];

const ADVANCE_MS: u64 = 4_000;

#[component]
pub fn HomeHero() -> impl IntoView {
    let (current, set_current) = signal(0usize);

    let timer = set_interval_with_handle(
        move || set_current.update(|i| *i = (*i + 1) % SLIDES.len()),
        Duration::from_millis(ADVANCE_MS),
    );
    if let Ok(handle) = timer {
        on_cleanup(move || handle.clear());
    }

    view! {
        <section class="hero">
            {SLIDES
                .iter()
                .enumerate()
                .map(|(idx, (src, alt))| {
                    view! {
                        <img
                            class="hero-slide"
                            class:is-visible=move || current.get() == idx
                            src=*src
                            alt=*alt
                        />
                    }
                })
                .collect_view()}
            <div class="hero-veil"></div>
            <div class="hero-dots">
                {SLIDES
                    .iter()
                    .enumerate()
                    .map(|(idx, _)| {
                        view! {
                            <button
                                class="hero-dot"
                                class:is-active=move || current.get() == idx
                                aria-label=format!("Go to slide {}", idx + 1)
                                on:click=move |_| set_current.set(idx)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
