use std::time::Instant;

use log::{debug, info, warn};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::classifier::{ClassDefinition, Classifier, ClassifierError, IntentModel};
use crate::config::TrainingConfig;
use crate::courses::detect_course;
use crate::knowledge::{KnowledgeBase, UNRECOGNIZED_REPLY};

/// Reply to blank input.
pub const EMPTY_INPUT_REPLY: &str = "Please enter a message.";

/// Turns one line of user text into one line of reply text.
///
/// In order, first match wins:
/// 1. a course keyword returns that course's description
/// 2. blank input returns [`EMPTY_INPUT_REPLY`]
/// 3. the intent model picks a label; text it has no vocabulary for is treated as `default`
/// 4. a random reply of that label (or of `default` if the label is not in the table)
///
/// The responder is immutable once trained and can be shared across sessions.
#[derive(Debug)]
pub struct Responder<M: IntentModel = Classifier> {
    knowledge: KnowledgeBase,
    model: M,
}

impl Responder<Classifier> {
    /// Trains a classifier over every intent's non-blank examples.
    ///
    /// Intents without usable examples (such as `default`) are left out of
    /// training and are only reached through fallback.
    ///
    /// # Errors
    /// Forwards any `ClassifierError` from validation or fitting.
    pub fn train(knowledge: KnowledgeBase, config: &TrainingConfig) -> Result<Self, ClassifierError> {
        let start = Instant::now();
        let mut builder = Classifier::builder().with_training_config(config.clone());

        for intent in knowledge.intents() {
            let examples: Vec<&str> = intent.training_examples().collect();
            if examples.is_empty() {
                debug!("Intent '{}' has no training examples, skipping", intent.name);
                continue;
            }
            builder = builder.add_class(
                ClassDefinition::new(intent.name.as_str(), intent.summary()).with_examples(examples),
            )?;
        }

        let classifier = builder.build()?;
        info!(
            "Responder ready: {} intents trained ({:.2?})",
            classifier.info().num_classes,
            start.elapsed()
        );
        Ok(Self::with_model(knowledge, classifier))
    }
}

impl<M: IntentModel> Responder<M> {
    /// Pairs a knowledge base with an already-trained model.
    pub fn with_model(knowledge: KnowledgeBase, model: M) -> Self {
        Self { knowledge, model }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Replies to `input` using the thread-local random source.
    pub fn respond(&self, input: &str) -> String {
        self.respond_with(input, &mut rand::rng())
    }

    /// Replies to `input`, drawing the reply variant from `rng`.
    pub fn respond_with<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> String {
        if let Some(course) = detect_course(input) {
            debug!("Course lookup matched '{}'", course);
            return course.description().to_string();
        }

        if input.trim().is_empty() {
            return EMPTY_INPUT_REPLY.to_string();
        }

        let responses = match self.classify(input) {
            Some(label) => self.knowledge.responses_for(&label),
            None => self.knowledge.default_responses(),
        };

        responses
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| UNRECOGNIZED_REPLY.to_string())
    }

    /// The predicted label, or `None` when the text should be answered from `default`.
    fn classify(&self, input: &str) -> Option<String> {
        if !self.model.recognizes(input) {
            debug!("No known terms in {:?}, using default replies", input);
            return None;
        }
        match self.model.predict(input) {
            Ok((label, _)) => {
                if self.knowledge.get(&label).is_none() {
                    warn!("Predicted intent '{}' has no responses, using default replies", label);
                }
                Some(label)
            }
            Err(e) => {
                warn!("Intent prediction failed: {}", e);
                None
            }
        }
    }
}
