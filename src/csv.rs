//! CSV Tokenizer
//!
//! Single-pass parser for the category CSV: quoted fields may hold commas,
//! newlines, and `""` escapes; `\r` is stripped. No schema awareness.

/// Parse CSV text into rows of fields.
///
/// A trailing partial row (no closing newline) is still emitted if any
/// content was buffered.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => {
                row.push(std::mem::take(&mut field));
            }
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            '\r' => {}
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

/// Serialize rows back to CSV, quoting fields that contain separators or
/// quotes. Inverse of [`parse`] for rectangular string tables.
#[cfg(test)]
pub fn serialize(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            if value.contains(['"', ',', '\n', '\r']) {
                out.push('"');
                out.push_str(&value.replace('"', "\"\""));
                out.push('"');
            } else {
                out.push_str(value);
            }
        }
        out.push('\n');
    }
    out
}

/// Case-insensitive lookup of the first header matching any candidate name
pub fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    for candidate in candidates {
        let wanted = candidate.to_lowercase();
        if let Some(idx) = headers
            .iter()
            .position(|h| h.trim().to_lowercase() == wanted)
        {
            return Some(idx);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_rows() {
        assert_eq!(
            parse("a,b,c\nd,e,f\n"),
            vec![row(&["a", "b", "c"]), row(&["d", "e", "f"])]
        );
    }

    #[test]
    fn quoted_field_keeps_commas() {
        assert_eq!(parse("A,\"B,C\",D\n"), vec![row(&["A", "B,C", "D"])]);
    }

    #[test]
    fn quoted_field_keeps_newlines() {
        assert_eq!(parse("\"a\nb\",c\n"), vec![row(&["a\nb", "c"])]);
    }

    #[test]
    fn doubled_quote_escapes() {
        assert_eq!(parse("\"say \"\"hi\"\"\"\n"), vec![row(&["say \"hi\""])]);
    }

    #[test]
    fn carriage_returns_stripped() {
        assert_eq!(parse("a,b\r\nc,d\r\n"), vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn trailing_partial_row_emitted() {
        assert_eq!(parse("a,b\nc,d"), vec![row(&["a", "b"]), row(&["c", "d"])]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn round_trip() {
        let rows = vec![
            row(&["name", "category"]),
            row(&["Brass, Birmingham", "Economic"]),
            row(&["say \"hi\"", "line\nbreak"]),
            row(&["plain", ""]),
        ];
        assert_eq!(parse(&serialize(&rows)), rows);
    }

    #[test]
    fn column_lookup_is_case_insensitive_and_ordered() {
        let headers = row(&["Id", " Category_Name ", "Name"]);
        assert_eq!(find_column(&headers, &["category", "category_name", "name"]), Some(1));
        assert_eq!(find_column(&headers, &["name"]), Some(2));
        assert_eq!(find_column(&headers, &["weight"]), None);
    }
}
