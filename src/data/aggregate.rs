use super::model::Corpus;

// ---------------------------------------------------------------------------
// Frequency counts within a filtered subset
// ---------------------------------------------------------------------------

/// One distinct value of the aggregated column and how many subset rows
/// carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Count occurrences of each distinct value of `column` over the rows in
/// `subset`, most frequent first.
///
/// Rows whose cell is absent or blank are skipped, so the counts sum to the
/// number of subset rows carrying a value. Equal counts keep first-seen
/// subset order: the accumulator records values as they first appear and the
/// descending sort is stable.
pub fn value_counts(corpus: &Corpus, subset: &[usize], column: &str) -> Vec<ValueCount> {
    let mut counts: Vec<ValueCount> = Vec::new();

    for &index in subset {
        let Some(value) = corpus.rows[index].get(column) else {
            continue;
        };
        match counts.iter_mut().find(|c| c.value == value) {
            Some(existing) => existing.count += 1,
            None => counts.push(ValueCount {
                value: value.to_string(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_from_str;
    use crate::data::model::{PARTIE, SOUS_PARTIE};

    fn corpus() -> Corpus {
        load_from_str(
            "Partie,Sous Partie,Sujet\n\
             P1,S2,T1\n\
             P1,S1,T2\n\
             P1,S1,T3\n\
             P2,,T4\n",
        )
        .unwrap()
    }

    #[test]
    fn counts_descend_and_sum_to_present_cells() {
        let corpus = corpus();
        let counts = value_counts(&corpus, &corpus.all_rows(), SOUS_PARTIE);

        assert_eq!(
            counts,
            vec![
                ValueCount {
                    value: "S1".to_string(),
                    count: 2
                },
                ValueCount {
                    value: "S2".to_string(),
                    count: 1
                },
            ]
        );
        // The blank cell of the last row is not counted anywhere.
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 3);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let corpus = corpus();
        let counts = value_counts(&corpus, &corpus.all_rows(), PARTIE);

        // P1 (3) ahead of P2 (1); and with an equal-count subset,
        // first-seen order decides.
        assert_eq!(counts[0].value, "P1");

        let tied = value_counts(&corpus, &[3, 0], PARTIE);
        assert_eq!(tied[0].value, "P2");
        assert_eq!(tied[1].value, "P1");
    }

    #[test]
    fn empty_subset_aggregates_to_nothing() {
        let corpus = corpus();
        assert!(value_counts(&corpus, &[], PARTIE).is_empty());
    }
}
