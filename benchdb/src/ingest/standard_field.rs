use serde::{Deserialize, Serialize};

/// Canonical columns a benchmark CSV is mapped onto.
///
/// Declaration order is significant: it is the order in which fields are
/// tried when a header matches more than one of them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum StandardField {
    ProcessNum,
    InputLength,
    OutputLength,
    Ttft,
    Tps,
    TotalTime,
}

impl StandardField {
    pub const ALL: [StandardField; 6] = [
        StandardField::ProcessNum,
        StandardField::InputLength,
        StandardField::OutputLength,
        StandardField::Ttft,
        StandardField::Tps,
        StandardField::TotalTime,
    ];

    pub const REQUIRED: [StandardField; 5] = [
        StandardField::ProcessNum,
        StandardField::InputLength,
        StandardField::OutputLength,
        StandardField::Ttft,
        StandardField::Tps,
    ];

    /// Header spellings recognised for this field across vendor tools.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            StandardField::ProcessNum => &[
                "Process Num",
                "ProcessNum",
                "process num",
                "parallel",
                "concurrency",
            ],
            StandardField::InputLength => &[
                "Input Length",
                "InputLength",
                "input length",
                "input",
                "total input",
            ],
            StandardField::OutputLength => &[
                "Output Length",
                "OutputLength",
                "output length",
                "output",
                "total output",
            ],
            StandardField::Ttft => &[
                "TTFT (ms)",
                "TTFT(ms)",
                "ttft ms",
                "ttft",
                "Mean TTFT (ms)",
                "Mean TTFT",
                "mean ttft",
            ],
            StandardField::Tps => &[
                "TPS (with prefill)",
                "TPS(with prefill)",
                "avg TPS (with prefill)",
                "tps with prefill",
                "tps",
                "output throughput (tok/s)",
                "output throughput",
                "throughput",
            ],
            StandardField::TotalTime => &[
                "Total Time (ms)",
                "TotalTime(ms)",
                "total time ms",
                "total time",
                "duration (s)",
                "duration(s)",
                "duration",
            ],
        }
    }

    pub fn friendly_label(self) -> &'static str {
        match self {
            StandardField::ProcessNum => "Process Num / parallel / concurrency",
            StandardField::InputLength => "Input Length / input",
            StandardField::OutputLength => "Output Length / output",
            StandardField::Ttft => "TTFT (ms) / Mean TTFT",
            StandardField::Tps => "TPS (with prefill) / output throughput",
            StandardField::TotalTime => "Total Time (ms) / duration",
        }
    }

    pub fn is_required(self) -> bool {
        self != StandardField::TotalTime
    }

    /// Only time columns may be reported in seconds.
    pub fn accepts_unit_conversion(self) -> bool {
        matches!(self, StandardField::Ttft | StandardField::TotalTime)
    }
}
