//! Dashboard session configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the evaluation loop and metric sources.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds between evaluation cycles. Default: 10.
    pub poll_interval_secs: Option<u64>,
    /// Percentage change that triggers an alert (inclusive). Default: 10.0.
    pub delta_threshold_pct: Option<f64>,
    /// Base URL of the video-analysis collaborator.
    /// Default: "http://localhost:8000".
    pub base_url: Option<String>,
    /// HTTP request timeout in seconds. Default: 5.
    pub request_timeout_secs: Option<u64>,
    /// Session length used for attention normalization. Default: 3000.
    pub session_duration_secs: Option<f64>,
    /// Active-participation window length. Default: 1800.
    pub participation_window_secs: Option<f64>,
}

impl SessionConfig {
    /// Returns the effective poll interval, defaulting to 10 seconds.
    pub fn effective_poll_interval_secs(&self) -> u64 {
        self.poll_interval_secs.unwrap_or(10)
    }

    /// Returns the effective alert threshold, defaulting to 10 percent.
    pub fn effective_delta_threshold_pct(&self) -> f64 {
        self.delta_threshold_pct.unwrap_or(10.0)
    }

    /// Returns the effective base URL.
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or("http://localhost:8000")
    }

    /// Returns the effective request timeout, defaulting to 5 seconds.
    pub fn effective_request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(5)
    }

    /// Returns the effective session duration, defaulting to 3000 seconds.
    pub fn effective_session_duration_secs(&self) -> f64 {
        self.session_duration_secs.unwrap_or(3000.0)
    }

    /// Returns the effective participation window, defaulting to 1800 seconds.
    pub fn effective_participation_window_secs(&self) -> f64 {
        self.participation_window_secs.unwrap_or(1800.0)
    }
}
