use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    Benchmark, BenchmarkConfig, utils::contains_ignore_case,
    validation::parse_test_date,
};

/// Narrows a benchmark listing.
///
/// Text filters are case-insensitive substring matches on the named config
/// field; `query` matches any of the identifying fields. The date range is
/// inclusive and compares calendar dates of `testDate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenchmarkFilter {
    pub query: Option<String>,
    pub submitter: Option<String>,
    pub model_name: Option<String>,
    pub server_name: Option<String>,
    pub sharding_config: Option<String>,
    pub chip_name: Option<String>,
    pub framework: Option<String>,
    pub framework_version: Option<String>,
    pub operator_acceleration: Option<String>,
    pub notes: Option<String>,
    pub framework_params: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl BenchmarkFilter {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(
        &self,
        benchmark: &Benchmark,
    ) -> bool {
        let config = &benchmark.config;

        if let Some(query) = active(&self.query) {
            if !matches_query(benchmark, query) {
                return false;
            }
        }

        let field_filters = [
            (&self.submitter, config.submitter()),
            (&self.model_name, config.model_name.as_str()),
            (&self.server_name, config.server_name.as_str()),
            (&self.sharding_config, config.sharding_config.as_str()),
            (&self.chip_name, config.chip_name.as_str()),
            (&self.framework, config.framework.as_str()),
            (&self.framework_version, config.framework_version()),
            (&self.operator_acceleration, config.operator_acceleration()),
            (&self.notes, config.notes()),
            (&self.framework_params, config.framework_params()),
        ];
        let fields_match = field_filters.iter().all(|(filter, value)| {
            active(filter)
                .is_none_or(|needle| contains_ignore_case(value, needle))
        });
        if !fields_match {
            return false;
        }

        self.matches_date_range(config)
    }

    fn matches_date_range(
        &self,
        config: &BenchmarkConfig,
    ) -> bool {
        if self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }

        let Some(test_date) = parse_test_date(&config.test_date) else {
            return false;
        };
        self.start_date.is_none_or(|start| test_date >= start)
            && self.end_date.is_none_or(|end| test_date <= end)
    }
}

/// A filter set to an empty or blank string is treated as unset.
fn active(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

fn matches_query(
    benchmark: &Benchmark,
    query: &str,
) -> bool {
    let config = &benchmark.config;
    [
        benchmark.id.as_str(),
        config.model_name.as_str(),
        config.server_name.as_str(),
        config.chip_name.as_str(),
        config.framework.as_str(),
        config.sharding_config.as_str(),
        config.submitter(),
        config.operator_acceleration(),
    ]
    .into_iter()
    .any(|value| contains_ignore_case(value, query))
}
