//! Extracted-match export (plain text and CSV)

use crate::core::models::MatchRecord;

/// Default file name for the plain-text export
pub const TEXT_FILE_NAME: &str = "matches.txt";

/// Default file name for the CSV export
pub const CSV_FILE_NAME: &str = "matches.csv";

/// One full match per line
#[must_use]
pub fn to_text(matches: &[MatchRecord]) -> String {
    matches
        .iter()
        .map(|m| m.full_text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSV with a `Full Match, Group 1..N` header
///
/// N is the widest group count among `matches`. Every data cell is
/// quoted; absent groups and padding cells are `""`.
///
/// # Examples
///
/// ```
/// use regex_rocket::core::models::MatchRecord;
/// use regex_rocket::core::services::export::to_csv;
///
/// let matches = vec![MatchRecord {
///     full_text: "say \"hi\"".to_string(),
///     start: 0,
///     groups: vec![None],
/// }];
/// assert_eq!(to_csv(&matches), "Full Match,Group 1\n\"say \"\"hi\"\"\",\"\"");
/// ```
#[must_use]
pub fn to_csv(matches: &[MatchRecord]) -> String {
    let width = matches.iter().map(|m| m.groups.len()).max().unwrap_or(0);

    let mut header = vec!["Full Match".to_string()];
    header.extend((1..=width).map(|i| format!("Group {i}")));

    let mut rows = vec![header.join(",")];
    for m in matches {
        let mut cells = vec![quote(&m.full_text)];
        cells.extend((0..width).map(|i| {
            quote(m.groups.get(i).and_then(Option::as_deref).unwrap_or(""))
        }));
        rows.push(cells.join(","));
    }
    rows.join("\n")
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
