use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Hierarchy level 1: top-level category.
pub const PARTIE: &str = "Partie";
/// Hierarchy level 2: sub-category within a Partie.
pub const SOUS_PARTIE: &str = "Sous Partie";
/// Hierarchy level 3 (leaf): topic within a Sous Partie.
pub const SUJET: &str = "Sujet";

/// Citation text columns, paired positionally with [`FONCTION_COLUMNS`].
/// The plural on the first one matches the dataset's actual header.
pub const CITATION_COLUMNS: [&str; 3] = ["Citations 1", "Citation 2", "Citation 3"];
/// Attribution label columns, paired positionally with [`CITATION_COLUMNS`].
pub const FONCTION_COLUMNS: [&str; 3] = ["Fonction 1", "Fonction 2", "Fonction 3"];

/// Columns that must exist after header normalization; loading fails
/// otherwise.
pub const REQUIRED_COLUMNS: [&str; 3] = [PARTIE, SOUS_PARTIE, SUJET];

// ---------------------------------------------------------------------------
// CorpusRow – one row of the corpus
// ---------------------------------------------------------------------------

/// A single corpus row: column name → cell value.
///
/// Blank cells are never stored, so looking up an empty cell and looking up a
/// column the row does not have both answer `None`.
#[derive(Debug, Clone, Default)]
pub struct CorpusRow {
    cells: BTreeMap<String, String>,
}

impl CorpusRow {
    pub fn new(cells: BTreeMap<String, String>) -> Self {
        Self { cells }
    }

    /// Cell value for `column`, or `None` when absent or blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Corpus – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed corpus: ordered rows plus the normalized header list.
///
/// Built once at startup and shared read-only with the request handlers;
/// nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// All rows, in file order.
    pub rows: Vec<CorpusRow>,
    /// Normalized column names, in file order.
    pub columns: Vec<String>,
}

impl Corpus {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the corpus has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indices of every row, i.e. the unfiltered subset.
    pub fn all_rows(&self) -> Vec<usize> {
        (0..self.rows.len()).collect()
    }
}
