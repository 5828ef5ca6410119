use crate::index::SearchEngine;
use crate::postings::Occurrence;

/// Maximum number of documents a search returns.
pub const TOP_K: usize = 5;

/// Which keyword's posting list a pool entry came from. Frequency ties are
/// broken in favor of the first keyword, so the merge has to know each
/// entry's provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    First,
    Second,
}

impl SearchEngine {
    /// Top-5 boolean-OR search for two keywords.
    ///
    /// Keywords are lowercased before lookup but not otherwise normalized;
    /// callers pass bare keywords. Documents are ranked by descending
    /// occurrence frequency, each appearing at most once, with frequency
    /// ties resolved toward `first`. Returns `None` when neither keyword is
    /// indexed; a keyword missing on its own just contributes no postings.
    pub fn search(&self, first: &str, second: &str) -> Option<Vec<String>> {
        let first = first.to_lowercase();
        let second = second.to_lowercase();
        let results = match (self.lookup(&first), self.lookup(&second)) {
            (None, None) => {
                tracing::debug!(%first, %second, "no matching keyword");
                return None;
            }
            (Some(postings), None) | (None, Some(postings)) => postings
                .iter()
                .take(TOP_K)
                .map(|occurrence| occurrence.document.clone())
                .collect(),
            (Some(first_postings), Some(second_postings)) => {
                rank_merged(first_postings, second_postings)
            }
        };
        tracing::debug!(%first, %second, matched = results.len(), "search complete");
        Some(results)
    }
}

/// Merge two posting lists into a ranked, deduplicated top-5 result.
///
/// Each round scans the remaining pool for the highest-frequency occurrence
/// whose document has not been picked yet; on equal frequency a candidate
/// from the first keyword's list displaces the current choice.
fn rank_merged(first: &[Occurrence], second: &[Occurrence]) -> Vec<String> {
    let mut pool: Vec<(Source, &Occurrence)> = first
        .iter()
        .map(|occurrence| (Source::First, occurrence))
        .chain(second.iter().map(|occurrence| (Source::Second, occurrence)))
        .collect();

    let mut results: Vec<String> = Vec::new();
    for _ in 0..TOP_K {
        let mut best: Option<usize> = None;
        for (candidate, &(source, occurrence)) in pool.iter().enumerate() {
            if results.iter().any(|picked| *picked == occurrence.document) {
                continue;
            }
            best = match best {
                None => Some(candidate),
                Some(current) => {
                    let (_, chosen) = pool[current];
                    if occurrence.frequency > chosen.frequency
                        || (occurrence.frequency == chosen.frequency && source == Source::First)
                    {
                        Some(candidate)
                    } else {
                        Some(current)
                    }
                }
            };
        }
        match best {
            Some(candidate) => {
                let (_, occurrence) = pool.remove(candidate);
                results.push(occurrence.document.clone());
            }
            // Everything left in the pool duplicates a picked document.
            None => break,
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postings::Occurrence;

    fn occurrences(entries: &[(&str, u32)]) -> Vec<Occurrence> {
        entries
            .iter()
            .map(|&(doc, freq)| Occurrence::new(doc, freq))
            .collect()
    }

    #[test]
    fn merges_by_descending_frequency() {
        let first = occurrences(&[("d1", 8), ("d2", 2)]);
        let second = occurrences(&[("d3", 5), ("d4", 1)]);
        assert_eq!(rank_merged(&first, &second), vec!["d1", "d3", "d2", "d4"]);
    }

    #[test]
    fn equal_frequencies_prefer_the_first_keyword() {
        let first = occurrences(&[("d1", 3)]);
        let second = occurrences(&[("d2", 3)]);
        assert_eq!(rank_merged(&first, &second), vec!["d1", "d2"]);

        // Same documents, opposite provenance.
        let first = occurrences(&[("d2", 3)]);
        let second = occurrences(&[("d1", 3)]);
        assert_eq!(rank_merged(&first, &second), vec!["d2", "d1"]);
    }

    #[test]
    fn shared_documents_appear_once() {
        let first = occurrences(&[("d1", 4), ("d2", 2)]);
        let second = occurrences(&[("d1", 3), ("d3", 1)]);
        assert_eq!(rank_merged(&first, &second), vec!["d1", "d2", "d3"]);
    }

    #[test]
    fn caps_at_five_results() {
        let first = occurrences(&[("d1", 9), ("d2", 8), ("d3", 7), ("d4", 6)]);
        let second = occurrences(&[("d5", 5), ("d6", 4), ("d7", 3)]);
        assert_eq!(
            rank_merged(&first, &second),
            vec!["d1", "d2", "d3", "d4", "d5"]
        );
    }
}
