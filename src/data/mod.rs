/// Data layer: the corpus table, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  corpus.csv
///      │
///      ▼
///  ┌─────────┐
///  │ loader  │  parse file → Corpus
///  └─────────┘
///      │
///      ▼
///  ┌─────────┐
///  │ Corpus  │  Vec<CorpusRow>, normalized headers
///  └─────────┘
///      │
///      ▼
///  ┌─────────┐     ┌───────────┐     ┌───────────┐
///  │ filter  │  →  │ aggregate │  /  │ citations │
///  └─────────┘     └───────────┘     └───────────┘
/// ```
pub mod aggregate;
pub mod citations;
pub mod filter;
pub mod loader;
pub mod model;
