pub mod assessment;
pub mod dataset;
pub mod error;
pub mod health;
pub mod openapi;
pub mod pages;
