use std::collections::HashMap;

mod error;
mod logistic;
mod model;
pub mod builder;
mod utils;
pub mod vectorizer;

pub use error::ClassifierError;
pub use model::Classifier;
pub use builder::{ClassifierBuilder, ClassDefinition};
pub use logistic::LogisticRegression;
pub use vectorizer::{TfIdfVectorizer, tokenize};

use crate::config::TrainingConfig;

/// The seam between the responder and whatever predicts intents.
///
/// `Classifier` is the built-in strategy; anything that maps text to one of
/// the trained labels can stand in for it.
pub trait IntentModel: Send + Sync {
    /// Predicts a label for non-empty text along with per-label scores.
    fn predict(&self, text: &str) -> Result<(String, HashMap<String, f32>), ClassifierError>;

    /// Whether the model has seen any of the text's terms during training.
    fn recognizes(&self, text: &str) -> bool;
}

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    /// Number of classes the classifier is trained on
    pub num_classes: usize,
    /// Labels of the classes, in registration order
    pub class_labels: Vec<String>,
    /// Descriptions of the classes
    pub class_descriptions: HashMap<String, String>,
    /// Number of distinct terms in the feature space
    pub vocabulary_size: usize,
    /// Number of example phrases used for training
    pub num_examples: usize,
    /// Gradient steps taken while fitting
    pub training_iterations: usize,
    pub training_config: TrainingConfig,
}
