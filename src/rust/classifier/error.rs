/// Represents the different types of errors that can occur in the intent classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Error occurred while extracting text features
    #[error("Feature error: {0}")]
    FeatureError(String),
    /// Error occurred while fitting the predictor
    #[error("Training error: {0}")]
    TrainingError(String),
    /// Error occurred during the build phase
    #[error("Build error: {0}")]
    BuildError(String),
    /// Error occurred while making predictions
    #[error("Prediction error: {0}")]
    PredictionError(String),
    /// Error occurred due to invalid input parameters
    #[error("Validation error: {0}")]
    ValidationError(String),
}
