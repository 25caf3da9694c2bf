use std::sync::Arc;
use std::collections::HashMap;
use log::debug;

use super::error::ClassifierError;
use super::logistic::LogisticRegression;
use super::utils::argmax;
use super::vectorizer::TfIdfVectorizer;
use super::IntentModel;
use crate::config::TrainingConfig;

/// A trained, immutable intent classifier: TF-IDF features fed to a
/// multinomial logistic regression.
///
/// # Thread Safety
///
/// All fields are `Send + Sync` and the heavy parts sit behind `Arc`, so one
/// classifier can be shared by any number of sessions:
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use admission_bot::{Classifier, ClassDefinition};
/// use std::sync::Arc;
/// use std::thread;
///
/// let classifier = Arc::new(Classifier::builder()
///     .add_class(
///         ClassDefinition::new("hostel", "Hostel facilities")
///             .with_examples(vec!["Hostel details"])
///     )?
///     .build()?);
///
/// let classifier_clone = Arc::clone(&classifier);
/// thread::spawn(move || {
///     classifier_clone.predict("hostel please").unwrap();
/// }).join().unwrap();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    pub(crate) labels: Arc<Vec<String>>,
    pub(crate) class_descriptions: Arc<HashMap<String, String>>,
    pub(crate) vectorizer: Arc<TfIdfVectorizer>,
    pub(crate) predictor: Arc<LogisticRegression>,
    pub(crate) training_config: TrainingConfig,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            num_classes: self.labels.len(),
            class_labels: self.labels.as_ref().clone(),
            class_descriptions: self.class_descriptions.as_ref().clone(),
            vocabulary_size: self.vectorizer.vocabulary_size(),
            num_examples: self.vectorizer.n_documents(),
            training_iterations: self.predictor.iterations(),
            training_config: self.training_config.clone(),
        }
    }

    /// Predicts the class of the input text and returns class probabilities.
    ///
    /// # Returns
    /// A tuple containing:
    /// * The predicted class label; ties go to the class registered first
    /// * A HashMap of class labels to their probabilities (summing to 1.0)
    ///
    /// # Errors
    /// `ValidationError` if the text is empty or whitespace.
    ///
    /// # Example
    /// ```rust
    /// # use admission_bot::{Classifier, ClassDefinition};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let classifier = Classifier::builder()
    /// #     .add_class(ClassDefinition::new("fees", "Fees")
    /// #         .with_examples(vec!["Annual fees?"]))?
    /// #     .add_class(ClassDefinition::new("hostel", "Hostel")
    /// #         .with_examples(vec!["Hostel details"]))?
    /// #     .build()?;
    /// let (label, scores) = classifier.predict("What are the fees?")?;
    /// assert_eq!(label, "fees");
    /// for (class, score) in scores {
    ///     println!("{}: {:.2}", class, score);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn predict(&self, text: &str) -> Result<(String, HashMap<String, f32>), ClassifierError> {
        if text.trim().is_empty() {
            return Err(ClassifierError::ValidationError("Input text cannot be empty".into()));
        }

        let features = self.vectorizer.transform(text);
        let probabilities = self.predictor.predict_proba(features.view());

        let best = argmax(probabilities.view())
            .ok_or_else(|| ClassifierError::PredictionError("Classifier has no classes".into()))?;
        let best_class = self.labels.get(best)
            .cloned()
            .ok_or_else(|| ClassifierError::PredictionError(format!("No label for class index {}", best)))?;

        let scores: HashMap<String, f32> = self.labels.iter()
            .cloned()
            .zip(probabilities.iter().copied())
            .collect();

        debug!("Predicted '{}' ({:.3}) for {:?}", best_class, probabilities[best], text);
        Ok((best_class, scores))
    }

    /// Whether the text shares at least one term with the training vocabulary.
    pub fn recognizes(&self, text: &str) -> bool {
        self.vectorizer.known_terms(text) > 0
    }
}

impl IntentModel for Classifier {
    fn predict(&self, text: &str) -> Result<(String, HashMap<String, f32>), ClassifierError> {
        Classifier::predict(self, text)
    }

    fn recognizes(&self, text: &str) -> bool {
        Classifier::recognizes(self, text)
    }
}
