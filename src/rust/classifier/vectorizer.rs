use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use ndarray::{Array1, Array2};
use regex::Regex;

use super::error::ClassifierError;
use super::utils::normalize_vector;

lazy_static! {
    /// Runs of two or more word characters; single letters are dropped.
    static ref TOKEN_PATTERN: Regex =
        Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex");
}

/// Lowercases the text and splits it into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Turns text into L2-normalised TF-IDF vectors over a vocabulary learned at fit time.
///
/// - term frequency is the raw count of the term in the text
/// - idf is smoothed: `ln((1 + n) / (1 + df)) + 1`
/// - terms outside the vocabulary are ignored, so unseen text maps to the zero vector
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> column index, in first-seen order.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column.
    idf: Array1<f32>,
    /// Number of documents seen during fitting.
    n_documents: usize,
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learns the vocabulary and idf weights from the training documents.
    ///
    /// # Errors
    /// - `FeatureError` if there are no documents
    /// - `FeatureError` if the documents contain no usable terms
    pub fn fit(&mut self, documents: &[String]) -> Result<(), ClassifierError> {
        if documents.is_empty() {
            return Err(ClassifierError::FeatureError("Cannot fit on an empty document set".into()));
        }

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = tokenize(doc);
            let mut seen = HashSet::new();
            for token in tokens {
                if !vocabulary.contains_key(&token) {
                    let idx = vocabulary.len();
                    vocabulary.insert(token.clone(), idx);
                }
                if seen.insert(token.clone()) {
                    *document_frequency.entry(token).or_insert(0) += 1;
                }
            }
        }

        if vocabulary.is_empty() {
            return Err(ClassifierError::FeatureError(
                "Training documents contain no terms of two or more characters".into()
            ));
        }

        let n = documents.len() as f32;
        let mut idf = Array1::<f32>::zeros(vocabulary.len());
        for (term, &idx) in &vocabulary {
            let df = document_frequency.get(term).copied().unwrap_or(0) as f32;
            idf[idx] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = documents.len();
        Ok(())
    }

    /// Transforms one text into its normalised TF-IDF vector.
    pub fn transform(&self, text: &str) -> Array1<f32> {
        let mut tf = Array1::<f32>::zeros(self.vocabulary.len());
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                tf[idx] += 1.0;
            }
        }
        normalize_vector(&(tf * &self.idf))
    }

    /// Transforms several texts into a row-per-text feature matrix.
    pub fn transform_batch(&self, texts: &[String]) -> Array2<f32> {
        let mut features = Array2::<f32>::zeros((texts.len(), self.vocabulary.len()));
        for (row, text) in texts.iter().enumerate() {
            features.row_mut(row).assign(&self.transform(text));
        }
        features
    }

    /// Number of tokens in `text` that belong to the vocabulary.
    pub fn known_terms(&self, text: &str) -> usize {
        tokenize(text)
            .iter()
            .filter(|token| self.vocabulary.contains_key(*token))
            .count()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}
