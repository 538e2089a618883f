use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;

use super::model::{Corpus, CorpusRow, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Startup-fatal loading failures; the process refuses to serve on any of
/// these.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fichier CSV non trouvé : {0}")]
    FileNotFound(String),
    #[error("échec de lecture de {path} : {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV invalide : {0}")]
    Csv(#[from] csv::Error),
    #[error("colonne manquante : {0}")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the corpus from a delimited text file.
///
/// Encoding is UTF-8 with BOM tolerance; the delimiter is auto-detected
/// among comma, semicolon and tab. Fails when the file is missing or a
/// required hierarchy column is absent after header normalization.
pub fn load(path: &Path) -> Result<Corpus, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    load_from_str(&content)
}

/// Parse corpus content that has already been read into memory.
pub fn load_from_str(content: &str) -> Result<Corpus, LoadError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let delimiter = detect_delimiter(content);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;

        let mut cells = BTreeMap::new();
        for (idx, column) in columns.iter().enumerate() {
            // Missing trailing cells and blank cells both stay out of the
            // map; values are kept verbatim otherwise.
            if let Some(value) = record.get(idx) {
                if !value.is_empty() {
                    cells.insert(column.clone(), value.to_string());
                }
            }
        }
        rows.push(CorpusRow::new(cells));
    }

    Ok(Corpus { rows, columns })
}

// ---------------------------------------------------------------------------
// Normalization helpers
// ---------------------------------------------------------------------------

/// Strip any byte-order marker and surrounding whitespace from a header cell.
fn normalize_header(raw: &str) -> String {
    raw.replace('\u{feff}', "").trim().to_string()
}

/// Pick the delimiter among comma, semicolon and tab.
///
/// Scans up to the first ten non-empty lines and keeps the candidate with the
/// highest occurrence count that holds on every scanned line; pathological
/// content falls back to the comma.
fn detect_delimiter(content: &str) -> u8 {
    const CANDIDATES: [u8; 3] = [b',', b';', b'\t'];

    let sample: Vec<&str> = content
        .lines()
        .filter(|line| !line.is_empty())
        .take(10)
        .collect();

    let mut best = b',';
    let mut best_count = 0;
    for candidate in CANDIDATES {
        let count = sample
            .iter()
            .map(|line| line.bytes().filter(|&b| b == candidate).count())
            .min()
            .unwrap_or(0);
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{PARTIE, SOUS_PARTIE, SUJET};

    #[test]
    fn parses_comma_separated_content() {
        let corpus = load_from_str(
            "Partie,Sous Partie,Sujet\n\
             P1,S1,T1\n\
             P1,S2,T2\n",
        )
        .unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.columns, vec![PARTIE, SOUS_PARTIE, SUJET]);
        assert_eq!(corpus.rows[0].get(PARTIE), Some("P1"));
        assert_eq!(corpus.rows[1].get(SUJET), Some("T2"));
    }

    #[test]
    fn detects_semicolon_and_tab_delimiters() {
        let semicolon = load_from_str("Partie;Sous Partie;Sujet\nP1;S1;T1\n").unwrap();
        assert_eq!(semicolon.rows[0].get(SOUS_PARTIE), Some("S1"));

        let tab = load_from_str("Partie\tSous Partie\tSujet\nP1\tS1\tT1\n").unwrap();
        assert_eq!(tab.rows[0].get(SOUS_PARTIE), Some("S1"));
    }

    #[test]
    fn normalizes_bom_and_padded_headers() {
        let corpus = load_from_str(
            "\u{feff}Partie, Sous Partie ,Sujet \n\
             P1,S1,T1\n",
        )
        .unwrap();

        assert_eq!(corpus.columns, vec![PARTIE, SOUS_PARTIE, SUJET]);
        assert_eq!(corpus.rows[0].get(SOUS_PARTIE), Some("S1"));
    }

    #[test]
    fn rejects_missing_required_column() {
        let result = load_from_str("Partie,Sous Partie\nP1,S1\n");
        assert!(matches!(result, Err(LoadError::MissingColumn(SUJET))));
    }

    #[test]
    fn blank_and_missing_cells_read_as_absent() {
        // Second row is ragged: the Sujet cell is missing entirely.
        let corpus = load_from_str(
            "Partie,Sous Partie,Sujet\n\
             P1,,T1\n\
             P1,S1\n",
        )
        .unwrap();

        assert_eq!(corpus.rows[0].get(SOUS_PARTIE), None);
        assert_eq!(corpus.rows[1].get(SUJET), None);
    }

    #[test]
    fn cell_values_are_kept_verbatim() {
        let corpus = load_from_str("Partie,Sous Partie,Sujet\n P1 ,S1,T1\n").unwrap();
        assert_eq!(corpus.rows[0].get(PARTIE), Some(" P1 "));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = load(Path::new("no/such/corpus.csv"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}
