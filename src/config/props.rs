use std::collections::BTreeMap;

use super::schema::{self, PROPS};
use crate::error::ConfigError;

/// Raw option id -> value map as a settings surface produces it.
///
/// Always holds every schema id; starts from the schema defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomProps {
    values: BTreeMap<&'static str, f64>,
}

impl CustomProps {
    pub fn defaults() -> Self {
        Self {
            values: PROPS.iter().map(|spec| (spec.id, spec.default_value)).collect(),
        }
    }

    /// Set one property. Unknown ids and non-finite values are rejected.
    pub fn set(&mut self, id: &str, value: f64) -> Result<(), ConfigError> {
        let spec = schema::find(id).ok_or_else(|| ConfigError::UnknownProp(id.to_owned()))?;
        if !value.is_finite() {
            return Err(ConfigError::NonFinite { id: id.to_owned() });
        }
        self.values.insert(spec.id, value);
        Ok(())
    }

    /// Parse and apply an `id=value` assignment.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let (id, raw) = assignment
            .split_once('=')
            .ok_or_else(|| ConfigError::Malformed(assignment.to_owned()))?;
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Malformed(assignment.to_owned()))?;
        self.set(id.trim(), value)
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.values.get(id).copied()
    }

    pub(crate) fn value(&self, id: &'static str) -> f64 {
        self.get(id)
            .or_else(|| schema::find(id).map(|spec| spec.default_value))
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().map(|(id, value)| (*id, *value))
    }
}

impl Default for CustomProps {
    fn default() -> Self {
        Self::defaults()
    }
}
