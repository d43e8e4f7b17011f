use crate::image_classifier::interface::{ClassifierError, ImageClassifier, Prediction};
use crate::image_classifier::model_config::ModelConfig;
use crate::image_classifier::rank;
use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};
use tract_onnx::prelude::*;

/// Pixel centering constant: 8-bit input maps to roughly [-1, 1].
const PIXEL_OFFSET: f32 = 127.5;

pub struct ImageClassifierTract {
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
    plan: Mutex<Option<SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>>>,
}

impl ImageClassifierTract {
    pub fn new(config: ModelConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("image_classifier"),
            plan: Mutex::new(None),
        }
    }
}

impl ImageClassifier for ImageClassifierTract {
    fn load(&self) -> Result<(), ClassifierError> {
        let size = self.config.input_size as usize;

        let plan = tract_onnx::onnx()
            .model_for_path(&self.config.model_path)
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?
            .with_input_fact(0, f32::fact([1, size, size, 3]).into())
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?
            .into_optimized()
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?
            .into_runnable()
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?;

        *self.plan.lock().unwrap() = Some(plan);

        let _ = self
            .logger
            .info(&format!("Model loaded from {}", self.config.model_path));

        Ok(())
    }

    fn predict(&self, image: Tensor) -> Result<Tensor, ClassifierError> {
        let size = self.config.input_size as usize;
        if image.shape() != [1, size, size, 3].as_slice() {
            return Err(ClassifierError::Inference(format!(
                "unexpected input shape {:?}",
                image.shape()
            )));
        }

        let guard = self.plan.lock().unwrap();
        let plan = guard
            .as_ref()
            .ok_or_else(|| ClassifierError::Inference("no model loaded".to_string()))?;

        let frame = image
            .into_array::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let centered = frame.mapv(|v| (v - PIXEL_OFFSET) / PIXEL_OFFSET);

        let outputs = plan
            .run(tvec!(centered.into_tensor().into_tvalue()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let scores = outputs
            .into_iter()
            .next()
            .ok_or_else(|| ClassifierError::Inference("model produced no output".to_string()))?;

        Ok(scores.into_tensor())
    }

    fn top_k_classes(&self, scores: Tensor, k: usize) -> Result<Vec<Prediction>, ClassifierError> {
        let values = rank::materialize_scores(scores)?;
        Ok(rank::top_k_classes(&values, k))
    }

    fn dispose(&self) {
        if self.plan.lock().unwrap().take().is_some() {
            let _ = self.logger.info("Model released");
        }
    }
}
