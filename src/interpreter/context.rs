use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::error::RuntimeError;

/// A numerically indexed map: sparse, keyed by the index's numeric value.
///
/// `OrderedFloat` gives `f64` a total order, so `-0` and `0` address the same
/// entry and a `NaN` index is a valid (if odd) key.
pub type NumericMap = BTreeMap<OrderedFloat<f64>, f64>;

/// Stores the mutable state shared by every statement of a session.
///
/// Two namespaces live side by side: named scalars and named numeric maps.
/// A name may appear in only one of them; assigning a scalar to a map name
/// fails, and declaring a map drops any scalar of the same name.
///
/// ## Usage
///
/// A `Context` is created by the caller, passed by `&mut` into every
/// evaluation, and dropped when the session ends. Writes take effect
/// immediately and are visible to every later read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    scalars: BTreeMap<String, f64>,
    maps:    BTreeMap<String, NumericMap>,
}

impl Context {
    /// Creates an empty context with no scalars and no maps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` as an empty map.
    ///
    /// Redeclaring an existing map resets it to empty. A scalar with the same
    /// name is removed.
    ///
    /// # Example
    /// ```
    /// use defmap_calc::interpreter::context::Context;
    ///
    /// let mut context = Context::new();
    /// context.declare_map("zz");
    /// context.write_map_entry("zz", 1.0, 50.0).unwrap();
    /// context.declare_map("zz");
    /// assert!(context.read_map_entry("zz", 1.0).unwrap().is_nan());
    /// ```
    pub fn declare_map(&mut self, name: &str) {
        if self.scalars.remove(name).is_some() {
            debug!(name, "scalar replaced by map declaration");
        }
        debug!(name, "declaring map");
        self.maps.insert(name.to_string(), NumericMap::new());
    }

    /// Reads the scalar `name`, or `NaN` if it has never been assigned.
    #[must_use]
    pub fn read_scalar(&self, name: &str) -> f64 {
        self.scalars.get(name).copied().unwrap_or(f64::NAN)
    }

    /// Assigns `value` to the scalar `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::AssignToMapName`] if `name` is declared as a
    /// map.
    pub fn write_scalar(&mut self, name: &str, value: f64) -> Result<(), RuntimeError> {
        if self.maps.contains_key(name) {
            return Err(RuntimeError::AssignToMapName { name: name.to_string() });
        }
        debug!(name, value, "scalar write");
        self.scalars.insert(name.to_string(), value);
        Ok(())
    }

    /// Reads entry `index` of the map `name`, or `NaN` if the entry is unset.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MapNotFound`] if no map called `name` exists.
    pub fn read_map_entry(&self, name: &str, index: f64) -> Result<f64, RuntimeError> {
        let map = self.map(name)
                      .ok_or_else(|| RuntimeError::MapNotFound { name: name.to_string() })?;
        Ok(map.get(&OrderedFloat(index)).copied().unwrap_or(f64::NAN))
    }

    /// Inserts or overwrites entry `index` of the map `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MapNotFound`] if no map called `name` exists.
    pub fn write_map_entry(&mut self,
                           name: &str,
                           index: f64,
                           value: f64)
                           -> Result<(), RuntimeError> {
        let map = self.maps
                      .get_mut(name)
                      .ok_or_else(|| RuntimeError::MapNotFound { name: name.to_string() })?;
        debug!(name, index, value, "map write");
        map.insert(OrderedFloat(index), value);
        Ok(())
    }

    /// Returns `true` if `name` is declared as a map.
    #[must_use]
    pub fn is_map(&self, name: &str) -> bool {
        self.maps.contains_key(name)
    }

    /// Returns the map called `name`, if declared.
    #[must_use]
    pub fn map(&self, name: &str) -> Option<&NumericMap> {
        self.maps.get(name)
    }

    /// Iterates over all assigned scalars in name order.
    pub fn scalars(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scalars.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Iterates over all declared maps in name order.
    pub fn maps(&self) -> impl Iterator<Item = (&str, &NumericMap)> {
        self.maps.iter().map(|(name, map)| (name.as_str(), map))
    }
}

impl std::fmt::Display for Context {
    /// Renders every binding on its own line: scalars as `name = value`, maps
    /// as an `@defmap name` line followed by `name[index] = value` entries.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.scalars() {
            writeln!(f, "{name} = {value}")?;
        }
        for (name, map) in self.maps() {
            writeln!(f, "@defmap {name}")?;
            for (index, value) in map {
                writeln!(f, "{name}[{}] = {value}", index.0)?;
            }
        }
        Ok(())
    }
}
