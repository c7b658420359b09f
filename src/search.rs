//! Typeahead Scoring
//!
//! Client-side re-ranking of search results. The API already filtered by
//! `q`; the rows are re-scored here and the top few shown. Deterministic,
//! case-insensitive, pure.

use crate::models::Game;

/// Trim raw input and decide whether it warrants a request.
///
/// Returns the trimmed query, or `None` for whitespace-only input, in
/// which case no request should be issued and any open panel cleared.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Score a candidate name against a query.
///
/// Tiers, highest first: exact match (1000), prefix match (900 minus the
/// candidate's excess length), substring match (800 minus the match
/// offset), then the count of distinct query characters found anywhere in
/// the candidate.
pub fn score(query: &str, candidate: &str) -> i32 {
    let q = query.to_lowercase();
    let c = candidate.to_lowercase();

    if q == c {
        return 1000;
    }
    if c.starts_with(&q) {
        let excess = (c.chars().count() - q.chars().count()) as i32;
        return 900 - excess;
    }
    if let Some(byte_offset) = c.find(&q) {
        let offset = c[..byte_offset].chars().count() as i32;
        return 800 - offset;
    }

    let mut overlap = 0;
    let mut counted: Vec<char> = Vec::new();
    for ch in q.chars() {
        if !counted.contains(&ch) && c.contains(ch) {
            overlap += 1;
            counted.push(ch);
        }
    }
    overlap
}

/// Top `limit` games by score, ties keeping API response order.
pub fn rank_top(query: &str, rows: Vec<Game>, limit: usize) -> Vec<Game> {
    let mut scored: Vec<(i32, Game)> = rows
        .into_iter()
        .map(|g| (score(query, &g.name), g))
        .collect();
    // stable sort: equal scores retain input order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, g)| g).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u32, name: &str) -> Game {
        Game {
            id,
            name: name.to_string(),
            image_url: None,
            average_rating: None,
            players_min: None,
            players_max: None,
            time_min: None,
            time_max: None,
            age_plus: None,
            category: None,
            description: None,
        }
    }

    #[test]
    fn blank_input_issues_no_query() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("\t\n"), None);
    }

    #[test]
    fn query_is_trimmed() {
        assert_eq!(normalize_query("  catan "), Some("catan".to_string()));
    }

    #[test]
    fn tiers_are_strictly_ordered() {
        let q = "chess";
        let exact = score(q, "chess");
        let prefix = score(q, "chess empire");
        let substring = score(q, "giant chess");
        let overlap = score(q, "checkers");
        assert!(exact > prefix);
        assert!(prefix > substring);
        assert!(substring > overlap);
    }

    #[test]
    fn exact_match_scores_1000() {
        assert_eq!(score("azul", "azul"), 1000);
    }

    #[test]
    fn prefix_score_decreases_with_excess_length() {
        assert_eq!(score("az", "azul"), 898);
        assert!(score("az", "azul") > score("az", "azul summer"));
    }

    #[test]
    fn substring_score_decreases_with_offset() {
        assert_eq!(score("chess", "a chess set"), 798);
        assert!(score("chess", "a chess set") > score("chess", "antique chess set"));
    }

    #[test]
    fn fallback_counts_distinct_overlapping_chars() {
        // 'r', 'o', 't' all occur in "tarot"; second 'o' not double counted
        assert_eq!(score("root", "tarot"), 3);
        assert_eq!(score("xyz", "catan"), 0);
    }

    #[test]
    fn scoring_is_case_insensitive() {
        assert_eq!(score("Chess", "chess board"), score("chess", "Chess Board"));
        assert_eq!(score("AZUL", "Azul"), 1000);
    }

    #[test]
    fn ties_keep_api_order() {
        let rows = vec![game(5, "catan"), game(9, "carcassonne"), game(2, "codenames")];
        // all score as prefix-miss / overlap ties for an unrelated query char set
        let ranked = rank_top("zzz", rows, 3);
        let ids: Vec<u32> = ranked.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![5, 9, 2]);
    }

    #[test]
    fn top_three_cut() {
        let rows = vec![
            game(1, "dominion"),
            game(2, "chess"),
            game(3, "chess empire"),
            game(4, "giant chess"),
            game(5, "checkers"),
        ];
        let ranked = rank_top("chess", rows, 3);
        let ids: Vec<u32> = ranked.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }
}
