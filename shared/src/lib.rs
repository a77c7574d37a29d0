//! Target-independent core of the DeepShield front-end.
//!
//! Everything here compiles on the host as well as on `wasm32`, so the
//! detection contract can be exercised without a browser.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod session;

pub use client::{DetectClient, DetectTransport, RawResponse, Timer, parse_response};
pub use config::DetectConfig;
pub use error::DetectError;
pub use model::{DetectionOutcome, DetectionResult, MediaKind, MediaSlot, MediaSubmission, Verdict};
pub use session::{AttemptId, DetectSession, Phase};
pub use url::Url;
