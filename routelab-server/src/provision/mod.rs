//! Startup provisioning of dataset files.
//!
//! The route dataset and the city table are large and live outside the
//! repository. When a file is missing on disk and a URL is configured for
//! it, it is downloaded once before loading.

mod client;
mod error;

pub use client::{DownloadClient, Provisioned};
pub use error::ProvisionError;
