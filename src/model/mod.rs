pub mod config;
pub mod record;
pub mod risk;

pub use config::Config;
pub use record::{BiometricRecord, PatientProfile};
pub use risk::RiskAssessment;
