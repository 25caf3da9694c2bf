use serde::{Deserialize, Serialize};

use crate::classifier::ClassifierError;

/// Knobs for fitting the intent predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Upper bound on gradient descent steps.
    pub max_iter: usize,
    /// Inverse L2 regularisation strength; smaller values regularise harder.
    pub regularization: f32,
    pub learning_rate: f32,
    /// Training stops once every gradient component is below this.
    pub tolerance: f32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_iter: 300,
            regularization: 1.0,
            learning_rate: 1.0,
            tolerance: 1e-4,
        }
    }
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.max_iter == 0 {
            return Err(ClassifierError::ValidationError("max_iter must be at least 1".into()));
        }
        if self.regularization <= 0.0 || !self.regularization.is_finite() {
            return Err(ClassifierError::ValidationError(format!(
                "regularization must be a positive number, got {}",
                self.regularization
            )));
        }
        if self.learning_rate <= 0.0 || !self.learning_rate.is_finite() {
            return Err(ClassifierError::ValidationError(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        if self.tolerance < 0.0 {
            return Err(ClassifierError::ValidationError("tolerance cannot be negative".into()));
        }
        Ok(())
    }
}
