use thiserror::Error;
use tract_onnx::prelude::Tensor;

#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The model artifact could not be read or deserialized.
    #[error("failed to load model: {0}")]
    ModelLoad(String),
    /// Unexpected tensor shape or execution failure.
    #[error("inference failed: {0}")]
    Inference(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f32,
}

pub trait ImageClassifier {
    /// Deserializes the frozen inference graph. Must complete before
    /// `predict`.
    fn load(&self) -> Result<(), ClassifierError>;
    /// Runs one forward pass over a single-image batch tensor and returns
    /// the raw per-class score tensor.
    fn predict(&self, image: Tensor) -> Result<Tensor, ClassifierError>;
    /// Materializes the score tensor, releases it, and returns the `k`
    /// highest-scoring labels in descending score order. `k` beyond the
    /// score length clamps silently.
    fn top_k_classes(&self, scores: Tensor, k: usize) -> Result<Vec<Prediction>, ClassifierError>;
    /// Releases the loaded graph. Idempotent when no model is loaded.
    #[allow(dead_code)]
    fn dispose(&self);
}
