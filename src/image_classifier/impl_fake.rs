use crate::image_classifier::interface::{ClassifierError, ImageClassifier, Prediction};
use crate::image_classifier::labels;
use crate::image_classifier::rank;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use tract_onnx::prelude::*;

/// Stands in for the real model. Scores are a deterministic function of the
/// input so repeated predictions over the same frame rank identically.
#[allow(dead_code)]
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    #[allow(dead_code)]
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger
                .with_namespace("image_classifier")
                .with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn load(&self) -> Result<(), ClassifierError> {
        let _ = self.logger.info("Fake model loaded");
        Ok(())
    }

    fn predict(&self, image: Tensor) -> Result<Tensor, ClassifierError> {
        let seed: f32 = {
            let view = image
                .to_array_view::<f32>()
                .map_err(|e| ClassifierError::Inference(e.to_string()))?;
            view.iter().take(64).sum()
        };
        drop(image);

        let count = labels::LABELS.len();
        let scores: Vec<f32> = (0..count)
            .map(|i| ((i as f32 * 37.0 + seed) % 101.0) / 101.0)
            .collect();

        let tensor = tract_ndarray::Array2::from_shape_vec((1, count), scores)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?
            .into_tensor();

        Ok(tensor)
    }

    fn top_k_classes(&self, scores: Tensor, k: usize) -> Result<Vec<Prediction>, ClassifierError> {
        let values = rank::materialize_scores(scores)?;
        Ok(rank::top_k_classes(&values, k))
    }

    fn dispose(&self) {
        let _ = self.logger.info("Fake model released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;

    fn fixture() -> ImageClassifierFake {
        let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));
        ImageClassifierFake::new(logger)
    }

    fn zero_input() -> Tensor {
        Tensor::zero::<f32>(&[1, 224, 224, 3]).unwrap()
    }

    #[test]
    fn test_zero_input_round_trip() {
        let classifier = fixture();
        classifier.load().unwrap();

        let scores = classifier.predict(zero_input()).unwrap();
        let ranked = classifier.top_k_classes(scores, 5).unwrap();

        assert_eq!(ranked.len(), 5);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for prediction in &ranked {
            assert!(labels::LABELS.contains(&prediction.label.as_str()));
        }
    }

    #[test]
    fn test_same_input_ranks_identically() {
        let classifier = fixture();

        let first = classifier
            .top_k_classes(classifier.predict(zero_input()).unwrap(), 5)
            .unwrap();
        let second = classifier
            .top_k_classes(classifier.predict(zero_input()).unwrap(), 5)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_k_beyond_table_size() {
        let classifier = fixture();

        let scores = classifier.predict(zero_input()).unwrap();
        let ranked = classifier.top_k_classes(scores, 1000).unwrap();

        assert_eq!(ranked.len(), labels::LABELS.len());
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let classifier = fixture();
        classifier.dispose();
        classifier.dispose();
    }
}
