use crate::image_classifier::model_config::ModelConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayKind {
    Console,
    #[allow(dead_code)]
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub top_k: usize,
    pub camera_device_index: u32,
    pub display: DisplayKind,
    pub display_base_size: u32,
    pub privacy_notice: String,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                model_path: "assets/web_model/skin_conditions.onnx".to_string(),
                input_size: 224,
            },
            top_k: 5,
            camera_device_index: 0,
            display: DisplayKind::Console,
            display_base_size: 480,
            privacy_notice: concat!(
                "IMPORTANT: No images or video are stored or transmitted. ",
                "All inference happens on this device and nothing leaves it."
            )
            .to_string(),
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}
