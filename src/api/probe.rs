//! # Media Duration Probe
//!
//! Episode records carry a media file URI but no duration; the UI wants to
//! show one. [`MediaProbe`] is the capability: give it a URI, get a
//! duration back, or zero when the duration cannot be determined. A probe
//! never errors and never blocks the event loop (callers run it on a
//! spawned task).
//!
//! [`FfprobeProbe`] shells out to `ffprobe` for a headless decode of the
//! stream metadata. [`NoopProbe`] is the stand-in when probing is disabled
//! or unavailable.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

#[async_trait]
pub trait MediaProbe: Send + Sync {
    /// Duration of the media at `uri`, or [`Duration::ZERO`] when unknown.
    async fn duration(&self, uri: &str) -> Duration;
}

/// Probes media durations by invoking `ffprobe` and reading its JSON output.
pub struct FfprobeProbe {
    binary: String,
}

impl FfprobeProbe {
    /// `binary` overrides the ffprobe executable; `None` resolves from PATH.
    pub fn new(binary: Option<String>) -> Self {
        Self {
            binary: binary.unwrap_or_else(|| "ffprobe".to_string()),
        }
    }

    async fn run(&self, uri: &str) -> Result<Duration, String> {
        let output = tokio::process::Command::new(&self.binary)
            .args(["-v", "quiet", "-print_format", "json", "-show_format", uri])
            .output()
            .await
            .map_err(|e| e.to_string())?;

        if !output.status.success() {
            return Err(format!("ffprobe exited with {}", output.status));
        }

        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).map_err(|e| e.to_string())?;
        let secs = json["format"]["duration"]
            .as_str()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or("no duration in ffprobe output")?;

        Ok(Duration::from_secs_f64(secs.max(0.0)))
    }
}

#[async_trait]
impl MediaProbe for FfprobeProbe {
    async fn duration(&self, uri: &str) -> Duration {
        match self.run(uri).await {
            Ok(duration) => duration,
            Err(e) => {
                debug!("Duration probe failed for {uri}: {e}");
                Duration::ZERO
            }
        }
    }
}

/// A probe that knows nothing. Every URI reports zero duration.
pub struct NoopProbe;

#[async_trait]
impl MediaProbe for NoopProbe {
    async fn duration(&self, _uri: &str) -> Duration {
        Duration::ZERO
    }
}
