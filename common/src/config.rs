use serde::{Deserialize, Serialize};

/// Collector that receives a copy of every saved segment.
pub const DEFAULT_WEBHOOK_URL: &str = "https://webhook.site/6938aefa-2e17-4765-876a-c1b344ef7b69";

/// Artificial round-trip delay applied before a submission completes.
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1000;

/// Runtime settings handed to the page shell as a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentFlowConfig {
    pub webhook_url: String,
    pub submit_delay_ms: u32,
}

impl Default for SegmentFlowConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}
