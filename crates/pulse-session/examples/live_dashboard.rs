//! Run a short dashboard session against the simulated source and print
//! every cycle's scores plus coaching lines for any alerts.
//!
//! ```sh
//! cargo run -p pulse-session --example live_dashboard
//! ```

use std::sync::Arc;
use std::time::Duration;

use pulse_core::{NarrationSink, PulseConfig, ScoreAlert, ScoreSet};
use pulse_scoring::insights;
use pulse_session::{DashboardSession, SimulatedMetricsSource};

struct ConsoleNarrator;

impl NarrationSink for ConsoleNarrator {
    fn on_alert(&self, alert: &ScoreAlert) {
        println!("  ! {}", insights::coaching_line(alert));
    }

    fn on_scores(&self, scores: &ScoreSet) {
        let named: Vec<String> = scores
            .named_scores()
            .iter()
            .map(|(kind, value)| format!("{}={value}", kind.label()))
            .collect();
        println!("  {}", named.join("  "));
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = PulseConfig::from_toml_str(
        r#"
        [session]
        poll_interval_secs = 2
        "#,
    )?;
    let mut session =
        DashboardSession::new(SimulatedMetricsSource, config).with_sink(Arc::new(ConsoleNarrator));

    for cycle in 1..=6 {
        println!("cycle {cycle}:");
        session.evaluate_once().await;
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    Ok(())
}
