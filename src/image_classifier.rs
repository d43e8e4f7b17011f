pub mod impl_fake;
pub mod impl_tract;
pub mod interface;
pub mod labels;
pub mod model_config;
pub mod rank;
