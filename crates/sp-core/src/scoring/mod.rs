pub mod confidence;
pub mod engine;
pub mod jitter;
pub mod weights;

pub use confidence::{Confidence, ConfidenceBands};
pub use engine::{
    predict_salary, EngineConfig, Prediction, PredictionEngine, LABEL_ABOVE_50K, LABEL_BELOW_50K,
};
pub use jitter::{FixedJitter, JitterSource, UniformJitter};
