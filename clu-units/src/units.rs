//! Unit registry - the built-in length units and runtime registration

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};
use clu_core::LengthError;
use crate::{Length, UnitDefinition};
use crate::parse::parse_with;

/// Process-wide registry, reached through `with_units` / `with_units_mut`
static UNITS: LazyLock<RwLock<UnitRegistry>> = LazyLock::new(|| RwLock::new(UnitRegistry::new()));

/// Run `f` against the process-wide registry.
///
/// The lock is held while `f` runs: `f` must not call `Length::convert_to`,
/// `str::parse::<Length>` or anything else that reaches the process-wide
/// registry again. Use the `UnitRegistry` it is given instead.
pub fn with_units<R>(f: impl FnOnce(&UnitRegistry) -> R) -> R {
    // The registry holds plain data, so a panic elsewhere cannot leave it torn.
    let guard = UNITS.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Run `f` with exclusive access to the process-wide registry.
///
/// `f` runs under the write lock; reaching the process-wide registry from
/// inside it (`Length::convert_to`, `str::parse::<Length>`, the free
/// functions of the `clu` crate) deadlocks.
pub fn with_units_mut<R>(f: impl FnOnce(&mut UnitRegistry) -> R) -> R {
    let mut guard = UNITS.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Registry of known length units, keyed by symbol
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: HashMap<String, UnitDefinition>,
}

impl UnitRegistry {
    /// Registry seeded with the built-in units (in, m, yd)
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtin_units();
        registry
    }

    /// Registry with no units at all
    pub fn empty() -> Self {
        UnitRegistry {
            units: HashMap::new(),
        }
    }

    pub fn with_unit(mut self, unit: UnitDefinition) -> Self {
        self.register(unit);
        self
    }

    /// Insert or replace the definition for `unit.symbol`.
    ///
    /// Last write wins; the replaced definition is returned.
    pub fn register(&mut self, unit: UnitDefinition) -> Option<UnitDefinition> {
        let symbol = unit.symbol.clone();
        let metres_per_unit = unit.metres_per_unit;
        let previous = self.units.insert(symbol.clone(), unit);
        tracing::debug!(
            symbol = %symbol,
            metres_per_unit,
            replaced = previous.is_some(),
            "registered length unit"
        );
        previous
    }

    /// Get a unit by symbol
    pub fn get(&self, symbol: &str) -> Option<&UnitDefinition> {
        self.units.get(symbol)
    }

    /// Get a unit by symbol, failing with `UnknownUnit`
    pub fn lookup(&self, symbol: &str) -> Result<&UnitDefinition, LengthError> {
        self.get(symbol)
            .ok_or_else(|| LengthError::unknown_unit(symbol))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.units.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All units, smallest first
    pub fn units(&self) -> Vec<&UnitDefinition> {
        let mut units: Vec<&UnitDefinition> = self.units.values().collect();
        units.sort_by(|a, b| a.compare_size(b).then_with(|| a.symbol.cmp(&b.symbol)));
        units
    }

    /// All unit symbols, smallest unit first
    pub fn symbols(&self) -> Vec<&str> {
        self.units().into_iter().map(|u| u.symbol.as_str()).collect()
    }

    /// Build a length, resolving `symbol` against this registry
    pub fn length(&self, magnitude: f64, symbol: &str) -> Result<Length, LengthError> {
        let unit = self.lookup(symbol)?;
        Ok(Length::new(magnitude, unit.clone()))
    }

    /// Rescale `length` into the unit named by `symbol`
    pub fn convert(&self, length: &Length, symbol: &str) -> Result<Length, LengthError> {
        let target = self.lookup(symbol)?;
        Ok(length.to_unit(target))
    }

    /// Parse a mixed-unit expression such as `"4 yd 2 ft 2 in"`
    pub fn parse(&self, text: &str) -> Result<Length, LengthError> {
        parse_with(self, text)
    }

    fn register_builtin_units(&mut self) {
        self.register(UnitDefinition::new("in", "inches", 0.0254));
        self.register(UnitDefinition::new("m", "metres", 1.0));
        self.register(UnitDefinition::new("yd", "yards", 0.9144));
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
