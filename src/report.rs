//! Machine-readable summary of a release run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Summary of one pipeline run, accumulated step by step
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Distribution name being released
    pub project: String,
    /// UTC time the run started
    pub started_at: DateTime<Utc>,
    /// Completed steps in execution order
    pub steps: Vec<StepReport>,
    /// File names placed in dist/ by the build step
    pub artifacts: Vec<String>,
    /// Whether the upload step ran (false on --dry-run)
    pub uploaded: bool,
}

/// Timing record for one completed pipeline step
#[derive(Debug, Serialize)]
pub struct StepReport {
    /// Step name (clean, build, upload)
    pub name: &'static str,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u128,
}

impl RunReport {
    /// Start an empty report for `project`
    pub fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            started_at: Utc::now(),
            steps: Vec::new(),
            artifacts: Vec::new(),
            uploaded: false,
        }
    }

    /// Record a completed step
    pub fn record_step(&mut self, name: &'static str, elapsed: Duration) {
        self.steps.push(StepReport {
            name,
            duration_ms: elapsed.as_millis(),
        });
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_steps_in_order() {
        let mut report = RunReport::new("demo-pkg");
        report.record_step("clean", Duration::from_millis(3));
        report.record_step("build", Duration::from_millis(1200));
        report.artifacts.push("demo_pkg-0.1.0.tar.gz".to_string());

        let json = report.to_json().expect("serialize");
        assert!(json.contains("\"project\": \"demo-pkg\""));
        let clean_at = json.find("\"clean\"").expect("clean step");
        let build_at = json.find("\"build\"").expect("build step");
        assert!(clean_at < build_at);
        assert!(json.contains("demo_pkg-0.1.0.tar.gz"));
    }
}
