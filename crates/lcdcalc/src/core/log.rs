//! Calculation log (the history drawer)
//!
//! Append-only in insertion order; rendered newest first. Cleared only by an
//! explicit user action.

use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::{CalcResult, Calculation, Operator};
use crate::storage::{Storage, StorageError, CALCULATED_KEY, LEGACY_CALCULATED_KEY};

/// Ordered collection of committed calculations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationLog {
    entries: Vec<Calculation>,
}

/// Stored record as written by current and older releases
#[derive(Debug, Deserialize)]
struct StoredCalculation {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, alias = "number1", alias = "_num1")]
    operand1: Option<f64>,
    #[serde(default, alias = "number2", alias = "_num2")]
    operand2: Option<f64>,
    #[serde(default, alias = "_operator")]
    operator: Option<String>,
    #[serde(default)]
    result: Option<f64>,
}

impl StoredCalculation {
    fn into_calculation(self) -> Option<Calculation> {
        let operand1 = self.operand1?;
        let operand2 = self.operand2?;
        let operator: Operator = self.operator?.parse().ok()?;
        let id = self
            .id
            .and_then(|id| Uuid::parse_str(&id).ok())
            .unwrap_or_else(Uuid::new_v4);
        let result = self
            .result
            .unwrap_or_else(|| Calculation::evaluate(operand1, operand2, operator));
        Some(Calculation::from_parts(
            id, operand1, operand2, operator, result,
        ))
    }
}

impl CalculationLog {
    /// Empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a committed calculation
    pub fn push(&mut self, calculation: Calculation) {
        self.entries.push(calculation);
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Calculation> {
        self.entries.iter()
    }

    /// Newest first, as the drawer shows them
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &Calculation> {
        self.entries.iter().rev()
    }

    /// Most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&Calculation> {
        self.entries.last()
    }

    /// Looks an entry up by id
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Calculation> {
        self.entries.iter().find(|c| c.id() == id)
    }

    /// Encodes the log as a JSON array
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string(&self.entries).map_err(StorageError::from)?)
    }

    /// Decodes a JSON array, skipping records that cannot be restored
    ///
    /// Anything other than an array yields an empty log.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        let records: Vec<serde_json::Value> = match serde_json::from_str(json) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "ignoring malformed calculation history");
                return Self::new();
            }
        };

        let total = records.len();
        let entries: Vec<Calculation> = records
            .into_iter()
            .filter_map(|record| serde_json::from_value::<StoredCalculation>(record).ok())
            .filter_map(StoredCalculation::into_calculation)
            .collect();

        if entries.len() < total {
            debug!(
                skipped = total - entries.len(),
                "skipped unreadable history records"
            );
        }
        Self { entries }
    }

    /// Writes the log under the `calculated` key
    pub fn persist<S: Storage + ?Sized>(&self, storage: &mut S) -> CalcResult<()> {
        let json = self.to_json()?;
        storage.set_item(CALCULATED_KEY, &json)?;
        Ok(())
    }

    /// Empties the log and removes the stored copy
    pub fn clear_persisted<S: Storage + ?Sized>(&mut self, storage: &mut S) -> CalcResult<()> {
        self.clear();
        storage.remove_item(CALCULATED_KEY)?;
        storage.remove_item(LEGACY_CALCULATED_KEY)?;
        Ok(())
    }

    /// Loads the stored log; absent or unreadable storage is an empty log
    pub fn restore<S: Storage + ?Sized>(storage: &S) -> Self {
        for key in [CALCULATED_KEY, LEGACY_CALCULATED_KEY] {
            match storage.get_item(key) {
                Ok(Some(json)) => {
                    let log = Self::from_json(&json);
                    debug!(key, entries = log.len(), "restored calculation history");
                    return log;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(key, error = %e, "could not read calculation history");
                    return Self::new();
                }
            }
        }
        Self::new()
    }
}

impl<'a> IntoIterator for &'a CalculationLog {
    type Item = &'a Calculation;
    type IntoIter = std::slice::Iter<'a, Calculation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
