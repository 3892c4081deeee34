use std::sync::LazyLock;

use regex::{Captures, Regex};

static PREFILL_DECODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)P(\d+)D").unwrap());
static TENSOR_OR_PIPELINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:TP|PP)(\d+)").unwrap());
static MULTIPLIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)X").unwrap());
static CARD_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:卡|GPU)").unwrap());

/// Number of accelerators described by a sharding descriptor such as
/// "TP4", "2P2D" or "8xH100". Unrecognised descriptors count as one.
pub fn gpu_count(sharding_config: &str) -> u32 {
    let descriptor = sharding_config.to_uppercase();

    if let Some(captures) = PREFILL_DECODE.captures(&descriptor) {
        if let (Some(prefill), Some(decode)) =
            (capture_number(&captures, 1), capture_number(&captures, 2))
        {
            return prefill.saturating_mul(decode).max(1);
        }
    }

    [&*TENSOR_OR_PIPELINE, &*MULTIPLIER, &*CARD_COUNT]
        .into_iter()
        .find_map(|pattern| {
            pattern
                .captures(&descriptor)
                .and_then(|captures| capture_number(&captures, 1))
        })
        .map(|count| count.max(1))
        .unwrap_or(1)
}

fn capture_number(
    captures: &Captures<'_>,
    group: usize,
) -> Option<u32> {
    captures.get(group)?.as_str().parse().ok()
}

/// Throughput normalised by the accelerator count of the sharding descriptor.
pub fn per_gpu_throughput(
    tokens_per_second: f64,
    sharding_config: &str,
) -> f64 {
    tokens_per_second / gpu_count(sharding_config) as f64
}
