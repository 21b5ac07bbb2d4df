//! Row-oriented tabular input (Gherkin data tables).

use indexmap::IndexMap;
use tracing::warn;

use crate::errors::{ExpectError, ExpectResult};
use crate::resolver::Resolver;
use crate::value::Value;

/// Raw cells of a data table, row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Parse pipe-delimited rows such as `| someKey | 42 |`.
    ///
    /// Blank lines are skipped; cells are trimmed.
    pub fn parse(input: &str) -> Self {
        let rows = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let line = line.strip_prefix('|').unwrap_or(line);
                let line = line.strip_suffix('|').unwrap_or(line);
                line.split('|').map(|cell| cell.trim().to_string()).collect()
            })
            .collect();
        Self { rows }
    }

    pub fn raw(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R, C> From<Vec<R>> for DataTable
where
    R: IntoIterator<Item = C>,
    C: Into<String>,
{
    fn from(rows: Vec<R>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

/// Build a mapping from `| key | value |` rows.
///
/// Values are resolved as tokens; key order follows row order. Cells after
/// the second are ignored. A repeated key keeps its first position and takes
/// the last value.
pub async fn rows_to_mapping(
    resolver: &Resolver,
    table: &DataTable,
) -> ExpectResult<IndexMap<String, Value>> {
    let mut keys = Vec::with_capacity(table.len());
    let mut tokens = Vec::with_capacity(table.len());
    for (idx, row) in table.raw().iter().enumerate() {
        match row.as_slice() {
            [key, value, ..] => {
                keys.push(key.as_str());
                tokens.push(value.as_str());
            }
            other => {
                return Err(ExpectError::MalformedRow {
                    row: idx,
                    expected: 2,
                    found: other.len(),
                })
            }
        }
    }

    let values = resolver.resolve_all(&tokens[..]).await?;

    let mut mapping = IndexMap::with_capacity(keys.len());
    for (key, value) in keys.into_iter().zip(values) {
        if mapping.insert(key.to_string(), value).is_some() {
            warn!(key, "duplicate key in key-value table, last value wins");
        }
    }
    Ok(mapping)
}

/// Resolve the last cell of every row, in row order.
pub async fn rows_to_sequence(resolver: &Resolver, table: &DataTable) -> ExpectResult<Vec<Value>> {
    let mut tokens = Vec::with_capacity(table.len());
    for (idx, row) in table.raw().iter().enumerate() {
        let cell = row.last().ok_or(ExpectError::MalformedRow {
            row: idx,
            expected: 1,
            found: 0,
        })?;
        tokens.push(cell.as_str());
    }
    resolver.resolve_all(&tokens[..]).await
}
