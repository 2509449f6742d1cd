pub mod assessment;
pub mod dataset;
pub mod insights;
pub mod llm;
#[cfg(test)]
pub(crate) mod stub_server;

pub use assessment::RiskAssessmentService;
pub use dataset::{DatasetLoader, DatasetStore};
pub use llm::GeminiClient;
