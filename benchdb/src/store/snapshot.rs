use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::{Benchmark, ComparisonReport};

/// Path value that keeps a store in memory only.
pub const IN_MEMORY: &str = ":memory:";

/// On-disk form of a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub benchmarks: Vec<Benchmark>,
    pub reports: Vec<ComparisonReport>,
}

impl Snapshot {
    /// An absent file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            },
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            },
        };

        serde_json::from_slice(&data).map_err(|source| StoreError::Snapshot {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Written to a sibling temporary file first, then renamed into place.
    pub fn save(
        &self,
        path: &Path,
    ) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        let data = serde_json::to_vec_pretty(self).map_err(|source| {
            StoreError::Snapshot {
                path: path.to_path_buf(),
                source,
            }
        })?;

        if let Some(parent) =
            path.parent().filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let temporary_path = temporary_path(path);
        fs::write(&temporary_path, data).map_err(io_error)?;
        fs::rename(&temporary_path, path).map_err(io_error)
    }
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
