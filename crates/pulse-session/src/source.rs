//! Metric sources — the seam to the external analysis collaborators.

use std::time::Duration;

use rand::Rng;

use pulse_core::{AudioMetrics, ExamRecord, LiveMetrics, SessionConfig, SourceError};

/// Provider of raw metric signals for one evaluation cycle.
///
/// Implementations may suspend on network I/O; the session awaits each
/// fetch to completion, so a slow source defers the cycle rather than
/// splitting it.
#[allow(async_fn_in_trait)]
pub trait MetricsSource: Send + Sync {
    /// Current video-derived signals.
    async fn live_metrics(&self) -> Result<LiveMetrics, SourceError>;

    /// Current audio-derived signals.
    async fn audio_metrics(&self) -> Result<AudioMetrics, SourceError>;

    /// Exam result rows for the class.
    async fn exam_records(&self) -> Result<Vec<ExamRecord>, SourceError>;
}

/// HTTP source backed by the video-analysis collaborator.
///
/// Missing JSON fields deserialize to neutral defaults, so a partial
/// payload is not an error; only transport and decode failures are.
pub struct HttpMetricsSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMetricsSource {
    /// Build from session config (base URL and request timeout).
    pub fn new(config: &SessionConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.effective_request_timeout_secs()))
            .build()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.effective_base_url().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl MetricsSource for HttpMetricsSource {
    async fn live_metrics(&self) -> Result<LiveMetrics, SourceError> {
        let response = self
            .client
            .get(self.url("live-metrics"))
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;
        response
            .json::<LiveMetrics>()
            .await
            .map_err(|e| SourceError::DecodeFailed(e.to_string()))
    }

    async fn audio_metrics(&self) -> Result<AudioMetrics, SourceError> {
        let response = self
            .client
            .get(self.url("audio-metrics"))
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;
        response
            .json::<AudioMetrics>()
            .await
            .map_err(|e| SourceError::DecodeFailed(e.to_string()))
    }

    async fn exam_records(&self) -> Result<Vec<ExamRecord>, SourceError> {
        let response = self
            .client
            .get(self.url("exam-scores"))
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;
        let csv_text = response
            .text()
            .await
            .map_err(|e| SourceError::DecodeFailed(e.to_string()))?;
        Ok(pulse_scoring::exam::parse_rows(&csv_text))
    }
}

/// Development source emitting bounded random signals in the same ranges
/// the stubbed upstream analyzers produce.
#[derive(Debug, Clone, Default)]
pub struct SimulatedMetricsSource;

impl MetricsSource for SimulatedMetricsSource {
    async fn live_metrics(&self) -> Result<LiveMetrics, SourceError> {
        let mut rng = rand::thread_rng();
        Ok(LiveMetrics {
            attention: rng.gen_range(75.0..100.0),
            engagement: rng.gen_range(70.0..100.0),
            participation: Some(rng.gen_range(5..20)),
            hand_raises: rng.gen_range(2..10),
            students: rng.gen_range(28..33),
        })
    }

    async fn audio_metrics(&self) -> Result<AudioMetrics, SourceError> {
        let mut rng = rand::thread_rng();
        Ok(AudioMetrics {
            speech_clarity: rng.gen_range(70.0..100.0),
            pace_score: rng.gen_range(75.0..100.0),
            volume_consistency: rng.gen_range(80.0..100.0),
            question_frequency: rng.gen_range(5.0..15.0),
        })
    }

    async fn exam_records(&self) -> Result<Vec<ExamRecord>, SourceError> {
        let mut rng = rand::thread_rng();
        let subjects = ["Mathematics", "Science", "English", "History"];
        let records = (0..24)
            .map(|i| ExamRecord {
                student_id: format!("S{:03}", i + 1),
                subject: subjects[i % subjects.len()].to_string(),
                percentage: rng.gen_range(40.0..100.0),
            })
            .collect();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_signals_stay_in_their_ranges() {
        let source = SimulatedMetricsSource;
        for _ in 0..50 {
            let live = source.live_metrics().await.unwrap();
            assert!((75.0..100.0).contains(&live.attention));
            assert!((70.0..100.0).contains(&live.engagement));
            assert!((2..10).contains(&live.hand_raises));

            let audio = source.audio_metrics().await.unwrap();
            assert!((70.0..100.0).contains(&audio.speech_clarity));
            assert!((5.0..15.0).contains(&audio.question_frequency));
        }
    }

    #[tokio::test]
    async fn simulated_exam_records_cover_subjects() {
        let records = SimulatedMetricsSource.exam_records().await.unwrap();
        assert_eq!(records.len(), 24);
        assert!(records.iter().any(|r| r.subject == "History"));
        assert!(records.iter().all(|r| (40.0..100.0).contains(&r.percentage)));
    }

    #[test]
    fn http_source_normalizes_base_url() {
        let config = SessionConfig {
            base_url: Some("http://localhost:9000/".to_string()),
            ..Default::default()
        };
        let source = HttpMetricsSource::new(&config).unwrap();
        assert_eq!(source.url("live-metrics"), "http://localhost:9000/live-metrics");
    }
}
