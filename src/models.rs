//! Catalog Models
//!
//! Data structures matching the board-game API wire format (camelCase).

use serde::{Deserialize, Serialize};

/// Board game summary as returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u32,
    pub name: String,
    pub image_url: Option<String>,
    /// Numeric string on the wire, e.g. "7.42"
    pub average_rating: Option<String>,
    pub players_min: Option<i32>,
    pub players_max: Option<i32>,
    pub time_min: Option<i32>,
    pub time_max: Option<i32>,
    pub age_plus: Option<i32>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl Game {
    /// Average rating as a number, 0.0 when absent or unparseable
    pub fn rating(&self) -> f64 {
        self.average_rating
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0)
    }
}

/// Extended record from `GET /board-games/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    pub id: u32,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub players_min: Option<i32>,
    pub players_max: Option<i32>,
    pub time_min: Option<i32>,
    pub time_max: Option<i32>,
    pub age_plus: Option<i32>,
    pub weight5: Option<String>,
    pub average_rating: Option<String>,
    pub year_published: Option<i32>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub og_image: Option<String>,
    pub primary_image: Option<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    #[serde(default)]
    pub designers: Vec<String>,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
}

impl GameDetail {
    pub fn rating(&self) -> f64 {
        self.average_rating
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0)
    }

    /// Gallery candidates in display order, deduplicated
    pub fn gallery(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let candidates = std::iter::once(self.primary_image.clone())
            .chain(self.gallery_images.iter().cloned().map(Some))
            .chain([self.image_url.clone(), self.og_image.clone()]);
        for src in candidates.flatten() {
            if !out.contains(&src) {
                out.push(src);
            }
        }
        out
    }
}

/// List response envelope: `{ total?, rows }`
///
/// `total` of 0 or absent means "unknown"; a missing `rows` field is an
/// empty page, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GamesPage {
    pub total: Option<u64>,
    #[serde(default)]
    pub rows: Vec<Game>,
}

impl GamesPage {
    /// Tolerant parse: some deployments return a bare array instead of the
    /// `{ total, rows }` envelope.
    pub fn from_json(value: serde_json::Value) -> Result<Self, String> {
        if value.is_array() {
            let rows = serde_json::from_value(value).map_err(|e| e.to_string())?;
            return Ok(GamesPage { total: None, rows });
        }
        serde_json::from_value(value).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_parses_with_missing_optionals() {
        let g: Game = serde_json::from_str(r#"{"id": 7, "name": "Azul"}"#).unwrap();
        assert_eq!(g.id, 7);
        assert_eq!(g.name, "Azul");
        assert_eq!(g.image_url, None);
        assert_eq!(g.rating(), 0.0);
    }

    #[test]
    fn game_rating_parses_numeric_string() {
        let g: Game = serde_json::from_str(
            r#"{"id": 1, "name": "Brass", "averageRating": "8.42", "imageUrl": "x.png"}"#,
        )
        .unwrap();
        assert!((g.rating() - 8.42).abs() < 1e-9);
        assert_eq!(g.image_url.as_deref(), Some("x.png"));
    }

    #[test]
    fn page_envelope_parses() {
        let v: serde_json::Value =
            serde_json::from_str(r#"{"total": 57, "rows": [{"id": 1, "name": "Catan"}]}"#).unwrap();
        let page = GamesPage::from_json(v).unwrap();
        assert_eq!(page.total, Some(57));
        assert_eq!(page.rows.len(), 1);
    }

    #[test]
    fn bare_array_body_becomes_rows() {
        let v: serde_json::Value = serde_json::from_str(r#"[{"id": 2, "name": "Root"}]"#).unwrap();
        let page = GamesPage::from_json(v).unwrap();
        assert_eq!(page.total, None);
        assert_eq!(page.rows[0].name, "Root");
    }

    #[test]
    fn missing_rows_is_empty_page() {
        let v: serde_json::Value = serde_json::from_str(r#"{"total": 12}"#).unwrap();
        let page = GamesPage::from_json(v).unwrap();
        assert_eq!(page.total, Some(12));
        assert!(page.rows.is_empty());
    }

    #[test]
    fn detail_rating_parses_numeric_string() {
        let d: GameDetail =
            serde_json::from_str(r#"{"id": 4, "name": "Gloomhaven", "averageRating": "8.6"}"#)
                .unwrap();
        assert!((d.rating() - 8.6).abs() < 1e-9);

        let bare: GameDetail = serde_json::from_str(r#"{"id": 5, "name": "Hive"}"#).unwrap();
        assert_eq!(bare.rating(), 0.0);
    }

    #[test]
    fn detail_gallery_dedupes_in_display_order() {
        let d: GameDetail = serde_json::from_str(
            r#"{
                "id": 3,
                "name": "Wingspan",
                "primaryImage": "a.jpg",
                "galleryImages": ["b.jpg", "a.jpg"],
                "imageUrl": "c.jpg",
                "ogImage": "b.jpg"
            }"#,
        )
        .unwrap();
        assert_eq!(d.gallery(), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }
}
