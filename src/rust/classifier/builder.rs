use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use log::info;

use super::error::ClassifierError;
use super::logistic::LogisticRegression;
use super::model::Classifier;
use super::vectorizer::TfIdfVectorizer;
use crate::config::TrainingConfig;

/// Represents a class definition with required label, description and training examples
#[derive(Debug, Clone)]
pub struct ClassDefinition {
    /// The unique identifier for the class
    pub label: String,
    /// A short description of what this class represents.
    pub description: String,
    /// Example phrases that belong to this class. Every example becomes one
    /// training row for the predictor.
    pub examples: Option<Vec<String>>,
}

impl ClassDefinition {
    /// Creates a new class definition with required label and description
    ///
    /// # Example
    /// ```
    /// use admission_bot::ClassDefinition;
    ///
    /// let class = ClassDefinition::new("hostel", "Questions about hostel facilities");
    /// ```
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            examples: None,
        }
    }

    /// Adds examples to the class definition
    ///
    /// # Example
    /// ```
    /// use admission_bot::ClassDefinition;
    ///
    /// let class = ClassDefinition::new("fees", "Questions about fees")
    ///     .with_examples(vec!["Annual fees?", "Tuition fees details"]);
    /// ```
    pub fn with_examples(mut self, examples: Vec<impl Into<String>>) -> Self {
        self.examples = Some(examples.into_iter().map(Into::into).collect());
        self
    }
}

/// A builder for fitting a Classifier with a fluent interface.
///
/// Classes keep their registration order; it decides ties at prediction time.
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    classes: Vec<(String, Vec<String>)>,
    class_descriptions: HashMap<String, String>,
    training_config: TrainingConfig,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance with default configuration
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            class_descriptions: HashMap::new(),
            training_config: TrainingConfig::default(),
        }
    }

    /// Sets the training configuration used by `build`
    ///
    /// # Example
    /// ```
    /// use admission_bot::{ClassifierBuilder, TrainingConfig};
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .with_training_config(TrainingConfig { max_iter: 500, ..Default::default() });
    /// ```
    pub fn with_training_config(mut self, config: TrainingConfig) -> Self {
        self.training_config = config;
        self
    }

    /// Validates class data according to the following rules:
    /// - Label must not be empty
    /// - Description must not be empty and must not exceed 1000 characters
    /// - Must have at least one example
    /// - No example text can be empty
    fn validate_class_data(
        label: &str,
        description: &str,
        examples: &[impl AsRef<str>]
    ) -> Result<(), ClassifierError> {
        const MAX_DESCRIPTION_LENGTH: usize = 1000;

        if label.is_empty() {
            return Err(ClassifierError::ValidationError("Class label cannot be empty".into()));
        }
        if description.is_empty() {
            return Err(ClassifierError::ValidationError("Class description cannot be empty".into()));
        }
        if description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(ClassifierError::ValidationError(
                format!("Class description is too long ({} chars, max is {})",
                    description.len(), MAX_DESCRIPTION_LENGTH)
            ));
        }
        if examples.is_empty() {
            return Err(ClassifierError::ValidationError(
                format!("Class '{}' must have at least one example", label)
            ));
        }
        if let Some(pos) = examples.iter().position(|e| e.as_ref().trim().is_empty()) {
            return Err(ClassifierError::ValidationError(
                format!("Example {} of class '{}' cannot be empty", pos + 1, label)
            ));
        }
        Ok(())
    }

    /// Adds a class with its label, description and examples
    ///
    /// # Errors
    /// `ValidationError` if:
    ///   - The class label is empty or already registered
    ///   - The description is empty or too long
    ///   - No examples are provided or any example is blank
    ///   - Maximum number of classes (100) is exceeded
    ///
    /// # Example
    /// ```
    /// use admission_bot::{ClassifierBuilder, ClassDefinition};
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .add_class(
    ///         ClassDefinition::new("hostel", "Hostel facilities")
    ///             .with_examples(vec!["Hostel details", "Is hostel available?"])
    ///     );
    /// assert!(builder.is_ok());
    /// ```
    pub fn add_class(mut self, class: ClassDefinition) -> Result<Self, ClassifierError> {
        const MAX_CLASSES: usize = 100;

        let examples = class.examples.unwrap_or_default();

        Self::validate_class_data(&class.label, &class.description, &examples)?;

        if self.class_descriptions.contains_key(&class.label) {
            return Err(ClassifierError::ValidationError(
                format!("Class '{}' is already defined", class.label)
            ));
        }
        if self.classes.len() >= MAX_CLASSES {
            return Err(ClassifierError::ValidationError(
                format!("Maximum number of classes ({}) exceeded", MAX_CLASSES)
            ));
        }

        self.classes.push((class.label.clone(), examples));
        self.class_descriptions.insert(class.label, class.description);

        Ok(self)
    }

    /// Fits the feature extractor and the predictor, returning the trained Classifier
    ///
    /// # Errors
    /// - `BuildError` if no classes have been added
    /// - `ValidationError` if the training configuration is invalid
    /// - `FeatureError` if the examples contain no usable terms
    /// - `TrainingError` if the predictor cannot be fitted
    ///
    /// # Example
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use admission_bot::{ClassifierBuilder, ClassDefinition};
    ///
    /// let classifier = ClassifierBuilder::new()
    ///     .add_class(
    ///         ClassDefinition::new("thanks", "Gratitude")
    ///             .with_examples(vec!["Thanks", "Thank you"])
    ///     )?
    ///     .add_class(
    ///         ClassDefinition::new("goodbye", "Leaving the conversation")
    ///             .with_examples(vec!["Bye", "See you"])
    ///     )?
    ///     .build()?;
    /// let (label, _) = classifier.predict("thank you so much")?;
    /// assert_eq!(label, "thanks");
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        if self.classes.is_empty() {
            return Err(ClassifierError::BuildError("At least one class must be added".to_string()));
        }
        self.training_config.validate()?;

        let start = Instant::now();
        let mut documents = Vec::new();
        let mut targets = Vec::new();
        for (idx, (label, examples)) in self.classes.iter().enumerate() {
            info!("Class '{}': {} examples", label, examples.len());
            for example in examples {
                documents.push(example.clone());
                targets.push(idx);
            }
        }

        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&documents)?;
        let features = vectorizer.transform_batch(&documents);

        let predictor = LogisticRegression::fit(
            &features,
            &targets,
            self.classes.len(),
            &self.training_config,
        )?;

        info!(
            "Trained on {} examples, {} classes, {} terms in {} iterations ({:.2?})",
            documents.len(),
            self.classes.len(),
            vectorizer.vocabulary_size(),
            predictor.iterations(),
            start.elapsed()
        );

        let labels = self.classes.into_iter().map(|(label, _)| label).collect();

        Ok(Classifier {
            labels: Arc::new(labels),
            class_descriptions: Arc::new(self.class_descriptions),
            vectorizer: Arc::new(vectorizer),
            predictor: Arc::new(predictor),
            training_config: self.training_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_class_handling() {
        let result = ClassifierBuilder::new()
            .add_class(
                ClassDefinition::new("empty", "Empty class")
                    .with_examples(vec![""])
            );
        assert!(result.is_err());
    }

    #[test]
    fn test_class_validation() {
        assert!(ClassifierBuilder::new()
            .add_class(ClassDefinition::new("", "Empty label").with_examples(vec!["hi"]))
            .is_err());

        assert!(ClassifierBuilder::new()
            .add_class(ClassDefinition::new("label", "").with_examples(vec!["hi"]))
            .is_err());

        // No examples at all
        assert!(ClassifierBuilder::new()
            .add_class(ClassDefinition::new("label", "Test class"))
            .is_err());

        assert!(ClassifierBuilder::new()
            .add_class(
                ClassDefinition::new("label", "Test class")
                    .with_examples(vec!["fine", "   "])
            )
            .is_err());
    }

    #[test]
    fn test_build_without_classes() {
        let result = ClassifierBuilder::new().build();
        assert!(matches!(result, Err(ClassifierError::BuildError(_))));
    }

    #[test]
    fn test_build_with_invalid_config() {
        let result = ClassifierBuilder::new()
            .with_training_config(TrainingConfig { learning_rate: 0.0, ..Default::default() })
            .add_class(ClassDefinition::new("a", "A").with_examples(vec!["hello there"]))
            .unwrap()
            .build();
        assert!(matches!(result, Err(ClassifierError::ValidationError(_))));
    }
}
