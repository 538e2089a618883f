use super::model::Corpus;

// ---------------------------------------------------------------------------
// Conjunctive equality predicates over named columns
// ---------------------------------------------------------------------------

/// Return indices of rows matching every `(column, expected)` predicate.
///
/// Matching is exact string equality on the loaded cell values: no trimming,
/// no case folding. A row whose cell is absent or blank never matches. An
/// empty predicate list matches the whole corpus, and an empty result is a
/// normal outcome; callers decide whether emptiness is an error.
pub fn matching_rows(corpus: &Corpus, predicates: &[(&str, &str)]) -> Vec<usize> {
    corpus
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            predicates
                .iter()
                .all(|(column, expected)| row.get(column) == Some(*expected))
        })
        .map(|(i, _)| i)
        .collect()
}
