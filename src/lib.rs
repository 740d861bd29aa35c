//! argoflow: render the Argoflow GitOps distribution and generate its secrets.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api;
pub use domain::AppError;
