use log::debug;
use ndarray::{Array1, Array2, ArrayView1, Axis};

use super::error::ClassifierError;
use super::utils::softmax;
use crate::config::TrainingConfig;

/// Multinomial logistic regression fitted by full-batch gradient descent.
///
/// Minimises the mean cross-entropy plus `||W||² / (2·C·n)`; the bias is not penalised.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    /// One row of weights per class.
    weights: Array2<f32>,
    bias: Array1<f32>,
    iterations: usize,
}

impl LogisticRegression {
    /// Fits the predictor on a row-per-example feature matrix.
    ///
    /// # Errors
    /// - `TrainingError` if the features and labels disagree in length or are empty
    /// - `TrainingError` if a label is outside `0..n_classes`
    /// - `ValidationError` if the training configuration is not usable
    pub fn fit(
        features: &Array2<f32>,
        labels: &[usize],
        n_classes: usize,
        config: &TrainingConfig,
    ) -> Result<Self, ClassifierError> {
        config.validate()?;
        if features.nrows() == 0 {
            return Err(ClassifierError::TrainingError("No training examples".into()));
        }
        if features.nrows() != labels.len() {
            return Err(ClassifierError::TrainingError(format!(
                "Got {} feature rows but {} labels",
                features.nrows(),
                labels.len()
            )));
        }
        if let Some(&bad) = labels.iter().find(|&&l| l >= n_classes) {
            return Err(ClassifierError::TrainingError(format!(
                "Label index {} out of range for {} classes",
                bad, n_classes
            )));
        }

        let n = features.nrows() as f32;
        let mut targets = Array2::<f32>::zeros((features.nrows(), n_classes));
        for (row, &label) in labels.iter().enumerate() {
            targets[[row, label]] = 1.0;
        }

        let mut weights = Array2::<f32>::zeros((n_classes, features.ncols()));
        let mut bias = Array1::<f32>::zeros(n_classes);
        let penalty = 1.0 / (config.regularization * n);
        let mut iterations = 0;

        for _ in 0..config.max_iter {
            let mut probs = features.dot(&weights.t()) + &bias;
            for mut row in probs.rows_mut() {
                let p = softmax(row.view());
                row.assign(&p);
            }
            let error = probs - &targets;

            let grad_w = error.t().dot(features) / n + &weights * penalty;
            let grad_b = error.sum_axis(Axis(0)) / n;

            let max_grad = grad_w
                .iter()
                .chain(grad_b.iter())
                .fold(0.0f32, |m, g| m.max(g.abs()));
            if max_grad < config.tolerance {
                debug!("Gradient descent converged after {} iterations", iterations);
                break;
            }

            weights.scaled_add(-config.learning_rate, &grad_w);
            bias.scaled_add(-config.learning_rate, &grad_b);
            iterations += 1;
        }

        Ok(Self { weights, bias, iterations })
    }

    /// Class probabilities for one feature vector.
    pub fn predict_proba(&self, features: ArrayView1<f32>) -> Array1<f32> {
        let logits = self.weights.dot(&features) + &self.bias;
        softmax(logits.view())
    }

    pub fn n_classes(&self) -> usize {
        self.bias.len()
    }

    pub fn n_features(&self) -> usize {
        self.weights.ncols()
    }

    /// Gradient steps taken during fitting.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
