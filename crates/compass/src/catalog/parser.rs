use super::normalizer::normalize_theme;
use super::{CatalogError, OccupationRow};
use std::io::Read;

/// Parse occupation rows from a delimited text source.
///
/// The delimiter is sniffed from the first line (comma, semicolon, or tab),
/// a leading byte-order mark is stripped, and an optional header row is
/// skipped. Rows that lack two fields, have an empty occupation name, or
/// whose theme string normalizes to nothing are dropped rather than
/// reported as errors; only an unreadable source fails.
pub(crate) fn parse_rows<R: Read>(mut reader: R) -> Result<Vec<OccupationRow>, CatalogError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let raw = raw.trim_start_matches('\u{feff}');

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(sniff_delimiter(raw))
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }
        if index == 0 && is_header_row(&record) {
            continue;
        }

        let occupation = record[0].trim();
        let theme = normalize_theme(&record[1]);
        if occupation.is_empty() || theme.is_empty() {
            continue;
        }

        rows.push(OccupationRow {
            occupation: occupation.to_string(),
            theme,
        });
    }

    Ok(rows)
}

fn sniff_delimiter(raw: &str) -> u8 {
    let first_line = raw.lines().next().unwrap_or("");
    [b';', b'\t', b',']
        .into_iter()
        .max_by_key(|delimiter| first_line.matches(char::from(*delimiter)).count())
        .filter(|delimiter| first_line.contains(char::from(*delimiter)))
        .unwrap_or(b',')
}

/// Column names like "Themes" contain theme-alphabet letters and would
/// otherwise survive normalization as a phantom occupation.
fn is_header_row(record: &csv::StringRecord) -> bool {
    let first = record[0].trim().to_ascii_lowercase();
    let second = record[1].trim().to_ascii_lowercase();
    first == "occupation"
        || first == "occupations"
        || matches!(second.as_str(), "theme" | "themes" | "code" | "codes" | "riasec")
}
