use crate::corpus::DocumentSource;
use crate::error::{Error, Result};
use crate::postings::{insert_last, Occurrence, PostingList};
use crate::tokenizer::{normalize, tokenize, NoiseWords};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// An in-memory inverted index over a document corpus.
///
/// The engine owns the keyword index and the noise-word set for its whole
/// lifetime. Construction is batch-only: [`SearchEngine::build_index`] must
/// run to completion before queries are issued, and a failed build leaves
/// the index in an unspecified state that callers should discard.
#[derive(Debug, Default)]
pub struct SearchEngine {
    index: HashMap<String, PostingList>,
    noise_words: NoiseWords,
}

impl SearchEngine {
    pub fn new(noise_words: NoiseWords) -> Self {
        Self {
            index: HashMap::new(),
            noise_words,
        }
    }

    /// Normalize a raw token against this engine's noise words.
    pub fn normalize(&self, token: &str) -> Option<String> {
        normalize(token, &self.noise_words)
    }

    /// Count keyword occurrences in one document's text.
    ///
    /// Produces at most one [`Occurrence`] per keyword; repeated sightings
    /// increment its frequency.
    pub fn scan_text(&self, document: &str, text: &str) -> HashMap<String, Occurrence> {
        let mut found: HashMap<String, Occurrence> = HashMap::new();
        for token in tokenize(text) {
            if let Some(keyword) = normalize(token, &self.noise_words) {
                match found.entry(keyword) {
                    Entry::Occupied(mut entry) => entry.get_mut().frequency += 1,
                    Entry::Vacant(entry) => {
                        entry.insert(Occurrence::new(document, 1));
                    }
                }
            }
        }
        found
    }

    /// Read one document through `source` and scan it for keywords.
    pub fn scan_document<S: DocumentSource>(
        &self,
        document: &str,
        source: &S,
    ) -> Result<HashMap<String, Occurrence>> {
        if document.is_empty() {
            return Err(Error::InvalidInput("empty document name".into()));
        }
        let text = source.read_document(document)?;
        Ok(self.scan_text(document, &text))
    }

    /// Fold one document's keyword counts into the index.
    ///
    /// New keywords start a singleton posting list; existing keywords get
    /// the occurrence appended and moved into descending-frequency position
    /// by [`insert_last`].
    pub fn merge(&mut self, keywords: HashMap<String, Occurrence>) {
        for (keyword, occurrence) in keywords {
            match self.index.entry(keyword) {
                Entry::Occupied(mut entry) => {
                    let postings = entry.get_mut();
                    postings.push(occurrence);
                    insert_last(postings);
                }
                Entry::Vacant(entry) => {
                    entry.insert(vec![occurrence]);
                }
            }
        }
    }

    /// Index every named document, in order, scanning then merging one
    /// document at a time. The first failure aborts the build.
    pub fn build_index<S: DocumentSource>(
        &mut self,
        documents: &[String],
        source: &S,
    ) -> Result<()> {
        for document in documents {
            let keywords = self.scan_document(document, source)?;
            tracing::debug!(%document, keywords = keywords.len(), "scanned document");
            self.merge(keywords);
        }
        tracing::info!(
            num_docs = documents.len(),
            num_keywords = self.index.len(),
            "indexed corpus"
        );
        Ok(())
    }

    /// The posting list for a keyword, if it is indexed.
    pub fn postings(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.index.get(keyword).map(Vec::as_slice)
    }

    pub(crate) fn lookup(&self, keyword: &str) -> Option<&PostingList> {
        self.index.get(keyword)
    }

    pub fn keyword_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn noise_words(&self) -> &NoiseWords {
        &self.noise_words
    }
}
