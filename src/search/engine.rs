use super::matcher;
use super::types::{QueryError, SearchHit, SearchMode, SearchOutcome};
use crate::corpus::store::Corpus;
use crate::index::normalizer::normalize;

/// Dispatches a query against the corpus and ranks the results.
///
/// An empty or whitespace-only query is rejected before dispatch. A query
/// containing whitespace is counted as a literal phrase in each document's
/// raw text; anything else is looked up as a single word in each document's
/// frequency table. Documents with zero occurrences are excluded.
pub fn search(corpus: &Corpus, query: &str) -> Result<SearchOutcome, QueryError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(QueryError::InvalidQuery);
    }

    let mode = if trimmed.contains(char::is_whitespace) {
        SearchMode::Phrase
    } else {
        SearchMode::Word
    };

    let mut hits = match mode {
        SearchMode::Word => search_word(corpus, trimmed),
        SearchMode::Phrase => search_phrase(corpus, trimmed),
    };

    // Count descending, document name ascending on ties, so ranking is
    // reproducible across runs.
    hits.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

    Ok(SearchOutcome { mode, hits })
}

fn search_word(corpus: &Corpus, query: &str) -> Vec<SearchHit> {
    let needle = normalize(query);

    corpus
        .documents()
        .filter_map(|doc| {
            doc.frequencies.get(&needle).map(|&count| SearchHit {
                name: doc.name.clone(),
                count,
            })
        })
        .collect()
}

fn search_phrase(corpus: &Corpus, phrase: &str) -> Vec<SearchHit> {
    corpus
        .documents()
        .filter_map(|doc| {
            let count = matcher::count_occurrences(phrase, &doc.text);
            (count > 0).then(|| SearchHit {
                name: doc.name.clone(),
                count,
            })
        })
        .collect()
}
