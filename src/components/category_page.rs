//! Category Index Page
//!
//! Loads the static category CSV, extracts the distinct values of the
//! category column, and renders an A–Z multi-column index. A missing
//! category column halts processing and surfaces the error.

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use percent_encoding::utf8_percent_encode;

use crate::api;
use crate::config::CATEGORY_CSV_URL;
use crate::csv;

/// Header names accepted for the category column, in preference order
const CATEGORY_COLUMNS: [&str; 3] = ["category", "category_name", "name"];

/// Distinct, sorted, non-empty values of the category column.
pub fn categories_from_csv(text: &str) -> Result<Vec<String>, String> {
    let rows = csv::parse(text);
    let Some(headers) = rows.first() else {
        return Ok(Vec::new());
    };
    let Some(column) = csv::find_column(headers, &CATEGORY_COLUMNS) else {
        return Err("No Category column found in CSV".to_string());
    };

    let mut distinct = BTreeSet::new();
    for row in rows.iter().skip(1) {
        if let Some(value) = row.get(column) {
            let value = value.trim();
            if !value.is_empty() {
                distinct.insert(value.to_string());
            }
        }
    }
    Ok(distinct.into_iter().collect())
}

/// Bucket category names by initial letter; non-A–Z initials land in "A".
/// Only non-empty buckets are returned, in alphabetical order.
pub fn group_by_initial(items: &[String]) -> Vec<(char, Vec<String>)> {
    let mut buckets: Vec<(char, Vec<String>)> = ('A'..='Z').map(|l| (l, Vec::new())).collect();
    for name in items {
        let initial = name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('A');
        let key = if initial.is_ascii_uppercase() { initial } else { 'A' };
        buckets[(key as u8 - b'A') as usize].1.push(name.clone());
    }
    buckets.into_iter().filter(|(_, v)| !v.is_empty()).collect()
}

/// encodeURIComponent-style slug for the results route
pub fn slugify(name: &str) -> String {
    utf8_percent_encode(name, api::COMPONENT).to_string()
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let (groups, set_groups) = signal(Vec::<(char, Vec<String>)>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            let outcome = match api::fetch_category_csv(CATEGORY_CSV_URL).await {
                Ok(text) => categories_from_csv(&text),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(categories) => {
                    web_sys::console::log_1(
                        &format!("[Category] {} categories", categories.len()).into(),
                    );
                    set_groups.set(group_by_initial(&categories));
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="category-index">
            <h1 class="page-title">"Board Games Categories"</h1>

            {move || error.get().map(|e| view! { <div class="error">"Error: " {e}</div> })}
            {move || {
                (loading.get() && error.get().is_none())
                    .then(|| view! { <div class="loading">"Loading…"</div> })
            }}

            <div class="category-columns">
                {move || {
                    groups
                        .get()
                        .into_iter()
                        .map(|(letter, names)| {
                            view! {
                                <section class="category-group">
                                    <h2>{letter.to_string()}</h2>
                                    <ul>
                                        {names
                                            .into_iter()
                                            .map(|name| {
                                                let href = format!("/category/{}", slugify(&name));
                                                view! {
                                                    <li>
                                                        <A href=href>{name}</A>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </section>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_distinct_sorted_categories() {
        let text = "id,Category\n1,Party\n2,Abstract\n3,Party\n4, \n";
        assert_eq!(
            categories_from_csv(text).unwrap(),
            vec!["Abstract".to_string(), "Party".to_string()]
        );
    }

    #[test]
    fn falls_back_through_column_candidates() {
        let text = "id,name\n1,Dexterity\n";
        assert_eq!(categories_from_csv(text).unwrap(), vec!["Dexterity".to_string()]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let text = "id,weight\n1,2.5\n";
        let err = categories_from_csv(text).unwrap_err();
        assert_eq!(err, "No Category column found in CSV");
    }

    #[test]
    fn empty_csv_yields_no_categories() {
        assert!(categories_from_csv("").unwrap().is_empty());
    }

    #[test]
    fn groups_by_initial_with_fallback_bucket() {
        let items: Vec<String> = ["Abstract", "Bluffing", "bluff calling", "4X Strategy"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let groups = group_by_initial(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 'A');
        // non-letter initial buckets under A
        assert_eq!(groups[0].1, vec!["Abstract".to_string(), "4X Strategy".to_string()]);
        assert_eq!(groups[1].0, 'B');
        assert_eq!(groups[1].1.len(), 2);
    }

    #[test]
    fn slug_escapes_component_characters() {
        assert_eq!(slugify("Science Fiction"), "Science%20Fiction");
        assert_eq!(slugify("City/Building"), "City%2FBuilding");
        assert_eq!(slugify("Pirates!"), "Pirates!");
    }
}
