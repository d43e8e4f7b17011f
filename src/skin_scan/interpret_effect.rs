use crate::device_display::interface::DeviceDisplayEvent;
use crate::image_classifier::interface::ClassifierError;
use crate::skin_scan::core::{Effect, Event};
use crate::skin_scan::main::SkinScan;
use std::time::Instant;
use tract_onnx::prelude::*;

impl SkinScan {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeToDisplayEvents => {
                let events = self.device_display.lock().unwrap().events();
                loop {
                    let mapped = match events.recv() {
                        Ok(DeviceDisplayEvent::NoticeAcknowledged) => Event::NoticeAcknowledged,
                        Ok(DeviceDisplayEvent::CaptureClicked) => Event::CaptureClicked,
                        Err(_) => break,
                    };
                    if self.event_sender.send(mapped).is_err() {
                        break;
                    }
                }
            }

            Effect::ShowNotice => {
                if let Err(e) = self
                    .device_display
                    .lock()
                    .unwrap()
                    .show_notice(&self.config.privacy_notice)
                {
                    let _ = self.logger.error(&format!("Failed to show notice: {}", e));
                }
            }

            Effect::SetupCamera => {
                let result = self.frame_capture.setup();

                if let Ok(info) = &result {
                    let (width, height) = info.display_size(self.config.display_base_size);
                    if let Err(e) = self
                        .device_display
                        .lock()
                        .unwrap()
                        .set_preview_size(width, height)
                    {
                        let _ = self
                            .logger
                            .error(&format!("Failed to size preview surface: {}", e));
                    }
                }

                let _ = self.event_sender.send(Event::CameraSetupDone(result));
            }

            Effect::LoadModel => {
                let started = Instant::now();
                let size = self.config.model.input_size as usize;

                let result = self.image_classifier.load().and_then(|_| {
                    // Warmup pass over an all-zero input, result discarded
                    let zeros = Tensor::zero::<f32>(&[1, size, size, 3])
                        .map_err(|e| ClassifierError::Inference(e.to_string()))?;
                    let scores = self.image_classifier.predict(zeros)?;
                    drop(scores);
                    Ok(())
                });

                if result.is_ok() {
                    let _ = self
                        .logger
                        .info(&format!("Model loaded in {:?}", started.elapsed()));
                }

                let _ = self.event_sender.send(Event::ModelLoadDone(result));
            }

            Effect::CaptureAndPredict => {
                let started = Instant::now();

                let result = self
                    .frame_capture
                    .capture()
                    .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                    .and_then(|image| {
                        let scores = self.image_classifier.predict(image)?;
                        let ranked = self
                            .image_classifier
                            .top_k_classes(scores, self.config.top_k)?;
                        Ok(ranked)
                    });

                match &result {
                    Ok(_) => {
                        let _ = self
                            .logger
                            .info(&format!("Prediction done in {:?}", started.elapsed()));
                    }
                    Err(e) => {
                        let _ = self.logger.error(&format!("Prediction failed: {}", e));
                    }
                }

                let _ = self.event_sender.send(Event::PredictDone(result));
            }
        }
    }
}
