//! Detail Gallery
//!
//! Big image with a thumbnail strip; prev/next wrap around.

use leptos::prelude::*;

#[component]
pub fn Gallery(images: Vec<String>, alt_base: String) -> impl IntoView {
    let total = images.len();
    if total == 0 {
        return view! { <div class="gallery-big gallery-empty"></div> }.into_any();
    }

    let imgs = StoredValue::new(images);
    let alt = StoredValue::new(alt_base);
    let (index, set_index) = signal(0usize);

    let prev = move |_| set_index.update(|i| *i = (*i + total - 1) % total);
    let next = move |_| set_index.update(|i| *i = (*i + 1) % total);

    view! {
        <div class="gallery">
            <div class="gallery-big">
                <img
                    src=move || imgs.with_value(|v| v[index.get()].clone())
                    alt=move || {
                        alt.with_value(|a| format!("{a} image {}", index.get() + 1))
                    }
                />
            </div>
            <div class="gallery-thumbs">
                <button class="gallery-arrow gallery-prev" aria-label="Previous image" on:click=prev>
                    "‹"
                </button>
                <div class="gallery-track">
                    {imgs
                        .get_value()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, src)| {
                            view! {
                                <button
                                    class="gallery-thumb"
                                    class:is-active=move || index.get() == idx
                                    aria-label=format!("Show image {}", idx + 1)
                                    on:click=move |_| set_index.set(idx)
                                >
                                    <img
                                        src=src
                                        alt=alt.with_value(|a| format!("{a} thumbnail {}", idx + 1))
                                    />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="gallery-arrow gallery-next" aria-label="Next image" on:click=next>
                    "›"
                </button>
            </div>
        </div>
    }
    .into_any()
}
