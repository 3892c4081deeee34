use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};

use chrono::Utc;
use uuid::Uuid;

use super::{IN_MEMORY, Snapshot, StoreError};
use crate::{
    Benchmark, BenchmarkDraft, ComparisonReport, ReportDraft,
    search::BenchmarkFilter,
};

#[derive(Debug, Clone, Default)]
struct StoreState {
    benchmarks: HashMap<String, Benchmark>,
    reports: HashMap<String, ComparisonReport>,
}

impl StoreState {
    fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            benchmarks: snapshot
                .benchmarks
                .into_iter()
                .map(|benchmark| (benchmark.id.clone(), benchmark))
                .collect(),
            reports: snapshot
                .reports
                .into_iter()
                .map(|report| (report.id.clone(), report))
                .collect(),
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            benchmarks: newest_first(
                self.benchmarks.values().cloned().collect(),
                |benchmark| (benchmark.created_at, benchmark.id.clone()),
            ),
            reports: newest_first(
                self.reports.values().cloned().collect(),
                |report| (report.created_at, report.id.clone()),
            ),
        }
    }
}

fn newest_first<T, K: Ord>(
    mut items: Vec<T>,
    key: impl Fn(&T) -> K,
) -> Vec<T> {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

/// Benchmarks and comparison reports, optionally mirrored to a JSON
/// snapshot file after every change.
///
/// A change is applied to a copy of the state and only becomes visible once
/// the snapshot has been written.
pub struct BenchmarkStore {
    state: Mutex<StoreState>,
    snapshot_path: Option<PathBuf>,
}

impl BenchmarkStore {
    pub fn in_memory() -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            snapshot_path: None,
        }
    }

    /// Opens a store backed by `path`, or an in-memory one when the path is
    /// absent or `:memory:`.
    pub fn open(path: Option<&Path>) -> Result<Self, StoreError> {
        let Some(path) = path.filter(|path| *path != Path::new(IN_MEMORY))
        else {
            return Ok(Self::in_memory());
        };

        let state = StoreState::from_snapshot(Snapshot::load(path)?);
        tracing::info!(
            path = %path.display(),
            benchmarks = state.benchmarks.len(),
            reports = state.reports.len(),
            "opened benchmark store"
        );
        Ok(Self {
            state: Mutex::new(state),
            snapshot_path: Some(path.to_path_buf()),
        })
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate<T>(
        &self,
        change: impl FnOnce(&mut StoreState) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut state = self.lock();
        let mut next = state.clone();
        let output = change(&mut next)?;
        if let Some(path) = &self.snapshot_path {
            next.snapshot().save(path)?;
        }
        *state = next;
        Ok(output)
    }

    /// Matching benchmarks, newest first.
    pub fn list_benchmarks(
        &self,
        filter: &BenchmarkFilter,
    ) -> Vec<Benchmark> {
        let state = self.lock();
        newest_first(
            state
                .benchmarks
                .values()
                .filter(|benchmark| filter.matches(benchmark))
                .cloned()
                .collect(),
            |benchmark| (benchmark.created_at, benchmark.id.clone()),
        )
    }

    pub fn get_benchmark(
        &self,
        id: &str,
    ) -> Option<Benchmark> {
        self.lock().benchmarks.get(id).cloned()
    }

    /// Inserts a benchmark, or fully replaces config and metrics of the one
    /// with the same id while keeping its creation time.
    ///
    /// Callers validate the draft first.
    pub fn save_benchmark(
        &self,
        draft: BenchmarkDraft,
    ) -> Result<Benchmark, StoreError> {
        self.mutate(|state| {
            let id = draft
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            let created_at = state
                .benchmarks
                .get(&id)
                .map(|existing| existing.created_at)
                .or(draft.created_at)
                .unwrap_or_else(Utc::now);

            let benchmark = Benchmark {
                id: id.clone(),
                config: draft.config,
                metrics: draft.metrics,
                created_at,
            };
            let replaced = state.benchmarks.insert(id, benchmark.clone());
            tracing::info!(
                id = %benchmark.id,
                rows = benchmark.metrics.len(),
                replaced = replaced.is_some(),
                "saved benchmark"
            );
            Ok(benchmark)
        })
    }

    /// Removes a benchmark together with every report that references it.
    /// Returns whether the benchmark existed.
    pub fn delete_benchmark(
        &self,
        id: &str,
    ) -> Result<bool, StoreError> {
        self.mutate(|state| {
            let removed = state.benchmarks.remove(id).is_some();
            let reports_before = state.reports.len();
            state.reports.retain(|_, report| !report.references(id));
            tracing::info!(
                id,
                removed,
                removed_reports = reports_before - state.reports.len(),
                "deleted benchmark"
            );
            Ok(removed)
        })
    }

    /// All reports, newest first.
    pub fn list_reports(&self) -> Vec<ComparisonReport> {
        let state = self.lock();
        newest_first(state.reports.values().cloned().collect(), |report| {
            (report.created_at, report.id.clone())
        })
    }

    pub fn get_report(
        &self,
        id: &str,
    ) -> Option<ComparisonReport> {
        self.lock().reports.get(id).cloned()
    }

    /// Inserts a report, or updates summary and timestamp of the one with
    /// the same id. Both referenced benchmarks must exist.
    pub fn save_report(
        &self,
        draft: ReportDraft,
    ) -> Result<ComparisonReport, StoreError> {
        self.mutate(|state| {
            for benchmark_id in [&draft.benchmark_id1, &draft.benchmark_id2] {
                if !state.benchmarks.contains_key(benchmark_id) {
                    return Err(StoreError::UnknownBenchmark(
                        benchmark_id.clone(),
                    ));
                }
            }

            let id = draft
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            let created_at = draft.created_at.unwrap_or_else(Utc::now);

            let report = match state.reports.get(&id) {
                Some(existing) => ComparisonReport {
                    summary: draft.summary,
                    created_at,
                    ..existing.clone()
                },
                None => ComparisonReport {
                    id: id.clone(),
                    benchmark_id1: draft.benchmark_id1,
                    benchmark_id2: draft.benchmark_id2,
                    model_name1: draft.model_name1,
                    model_name2: draft.model_name2,
                    summary: draft.summary,
                    created_at,
                },
            };
            state.reports.insert(id, report.clone());
            tracing::info!(id = %report.id, "saved comparison report");
            Ok(report)
        })
    }

    pub fn delete_report(
        &self,
        id: &str,
    ) -> Result<bool, StoreError> {
        self.mutate(|state| Ok(state.reports.remove(id).is_some()))
    }
}
