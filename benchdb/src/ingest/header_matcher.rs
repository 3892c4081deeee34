use std::{
    collections::{BTreeMap, btree_map},
    sync::LazyLock,
};

use serde::Serialize;

use super::{StandardField, conversion_factor};

/// Aliases of every field in normalized form, built once per process.
static NORMALIZED_ALIASES: LazyLock<Vec<(StandardField, Vec<String>)>> =
    LazyLock::new(|| {
        StandardField::ALL
            .iter()
            .map(|&field| {
                let aliases = field
                    .aliases()
                    .iter()
                    .map(|alias| normalize_header(alias))
                    .collect();
                (field, aliases)
            })
            .collect()
    });

/// Lower-cases, drops everything but word characters and whitespace, and
/// collapses whitespace, so "TTFT (ms)", "ttft_ms" and "TTFT  MS" meet on
/// common ground. Underscores separate words like spaces do.
pub fn normalize_header(header: &str) -> String {
    let stripped: String = header
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' { ' ' } else { c })
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Where a standard field is read from in the source CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnBinding {
    pub column_index: usize,
    pub source_column: String,
    pub conversion_factor: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HeaderMapping {
    bindings: BTreeMap<StandardField, ColumnBinding>,
}

impl HeaderMapping {
    pub fn get(
        &self,
        field: StandardField,
    ) -> Option<&ColumnBinding> {
        self.bindings.get(&field)
    }

    pub fn contains(
        &self,
        field: StandardField,
    ) -> bool {
        self.bindings.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, StandardField, ColumnBinding> {
        self.bindings.iter()
    }

    /// Mandatory fields that no header could be matched to.
    pub fn missing_required(&self) -> Vec<StandardField> {
        StandardField::REQUIRED
            .into_iter()
            .filter(|field| !self.contains(*field))
            .collect()
    }

    fn bind(
        &mut self,
        field: StandardField,
        column_index: usize,
        source_column: &str,
    ) {
        if let btree_map::Entry::Vacant(entry) = self.bindings.entry(field) {
            let conversion_factor = if field.accepts_unit_conversion() {
                conversion_factor(source_column)
            } else {
                1.0
            };
            entry.insert(ColumnBinding {
                column_index,
                source_column: source_column.to_string(),
                conversion_factor,
            });
        }
    }
}

fn exact_match(normalized_header: &str) -> Option<StandardField> {
    NORMALIZED_ALIASES.iter().find_map(|(field, aliases)| {
        aliases
            .iter()
            .any(|alias| alias == normalized_header)
            .then_some(*field)
    })
}

fn substring_match(
    normalized_header: &str,
    is_open: impl Fn(StandardField) -> bool,
) -> Option<StandardField> {
    NORMALIZED_ALIASES
        .iter()
        .filter(|(field, _)| is_open(*field))
        .find_map(|(field, aliases)| {
            aliases
                .iter()
                .any(|alias| {
                    normalized_header.contains(alias.as_str())
                        || alias.contains(normalized_header)
                })
                .then_some(*field)
        })
}

/// Associates CSV headers with standard fields.
///
/// Exact matches over the whole header row are settled first; substring
/// matches then fill the fields still open, scanning headers in order. A
/// header that exactly names one field is never reassigned to another.
pub fn map_headers<S: AsRef<str>>(headers: &[S]) -> HeaderMapping {
    let normalized: Vec<String> = headers
        .iter()
        .map(|header| normalize_header(header.as_ref()))
        .collect();

    let mut mapping = HeaderMapping::default();
    let mut settled = vec![false; headers.len()];

    for (index, header) in normalized.iter().enumerate() {
        if header.is_empty() {
            continue;
        }
        if let Some(field) = exact_match(header) {
            settled[index] = true;
            mapping.bind(field, index, headers[index].as_ref());
        }
    }

    for (index, header) in normalized.iter().enumerate() {
        if header.is_empty() || settled[index] {
            continue;
        }
        if let Some(field) =
            substring_match(header, |field| !mapping.contains(field))
        {
            mapping.bind(field, index, headers[index].as_ref());
        }
    }

    tracing::debug!(
        headers = headers.len(),
        matched = mapping.len(),
        "mapped CSV headers"
    );
    mapping
}
