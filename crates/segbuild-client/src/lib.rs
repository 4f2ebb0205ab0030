//! # segbuild-client - Segment Delivery
//!
//! Sends saved segments to the configured remote endpoint.
//!
//! Depends on [`segbuild_core`] for the payload and error types.
//!
//! ## Public API
//!
//! - [`SegmentSink`] - Send-able async trait implemented by every destination
//! - [`WebhookClient`] - reqwest-based JSON POST to a fixed URL
//! - [`WebhookOptions`] - URL, timeout and status-code policy
//! - [`Delivery`] - What the endpoint answered

pub mod sink;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod webhook;

pub use sink::{Delivery, LocalSegmentSink, SegmentSink};
pub use webhook::{parse_endpoint, WebhookClient, WebhookOptions};
