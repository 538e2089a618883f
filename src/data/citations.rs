use serde::{Deserialize, Serialize};

use super::model::{Corpus, CITATION_COLUMNS, FONCTION_COLUMNS};

// ---------------------------------------------------------------------------
// Citation records
// ---------------------------------------------------------------------------

/// One citation with its attribution label, as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub citation: String,
    pub fonction: String,
}

/// Collect the citations carried by the rows in `subset`.
///
/// Rows are scanned in subset order; within a row the three positional
/// (citation, fonction) column pairs are scanned in order 1→2→3. A pair is
/// emitted when its citation cell is non-blank after trimming; the fonction
/// label is trimmed, or empty when the cell is absent. Duplicates across
/// rows are kept.
pub fn extract_citations(corpus: &Corpus, subset: &[usize]) -> Vec<Citation> {
    let mut citations = Vec::new();

    for &index in subset {
        let row = &corpus.rows[index];
        for (citation_col, fonction_col) in CITATION_COLUMNS.into_iter().zip(FONCTION_COLUMNS) {
            let Some(text) = row.get(citation_col) else {
                continue;
            };
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            let fonction = row.get(fonction_col).map(str::trim).unwrap_or_default();
            citations.push(Citation {
                citation: text.to_string(),
                fonction: fonction.to_string(),
            });
        }
    }

    citations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_from_str;

    const HEADER: &str =
        "Partie,Sous Partie,Sujet,Citations 1,Fonction 1,Citation 2,Fonction 2,Citation 3,Fonction 3";

    #[test]
    fn pairs_are_scanned_in_positional_order() {
        let corpus = load_from_str(&format!(
            "{HEADER}\n\
             P1,S1,T1,premier,Chef,deuxième,Technicien,troisième,\n"
        ))
        .unwrap();

        let citations = extract_citations(&corpus, &[0]);
        assert_eq!(
            citations,
            vec![
                Citation {
                    citation: "premier".to_string(),
                    fonction: "Chef".to_string()
                },
                Citation {
                    citation: "deuxième".to_string(),
                    fonction: "Technicien".to_string()
                },
                Citation {
                    citation: "troisième".to_string(),
                    fonction: String::new()
                },
            ]
        );
    }

    #[test]
    fn citation_and_fonction_are_trimmed() {
        let corpus = load_from_str(&format!(
            "{HEADER}\n\
             P1,S1,T1, un mot , Chef d'atelier ,,,,\n"
        ))
        .unwrap();

        let citations = extract_citations(&corpus, &[0]);
        assert_eq!(citations[0].citation, "un mot");
        assert_eq!(citations[0].fonction, "Chef d'atelier");
    }

    #[test]
    fn whitespace_only_citations_are_skipped() {
        let corpus = load_from_str(&format!(
            "{HEADER}\n\
             P1,S1,T1,   ,Chef,,,,\n"
        ))
        .unwrap();

        assert!(extract_citations(&corpus, &[0]).is_empty());
    }

    #[test]
    fn duplicates_across_rows_are_kept() {
        let corpus = load_from_str(&format!(
            "{HEADER}\n\
             P1,S1,T1,pareil,Chef,,,,\n\
             P1,S1,T1,pareil,Chef,,,,\n"
        ))
        .unwrap();

        assert_eq!(extract_citations(&corpus, &[0, 1]).len(), 2);
    }

    #[test]
    fn rows_without_citation_cells_emit_nothing() {
        let corpus = load_from_str("Partie,Sous Partie,Sujet\nP1,S1,T1\n").unwrap();
        assert!(extract_citations(&corpus, &[0]).is_empty());
    }
}
