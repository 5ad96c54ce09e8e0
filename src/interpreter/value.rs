use crate::{error::RuntimeError, interpreter::context::Context};

/// The result of parsing any sub-expression.
///
/// Every variant can be asked to [`read`](Self::read) a number and to
/// [`write`](Self::write) one; variants that do not support a capability
/// return an error rather than panicking. Only assignment ever calls
/// `write`, so whether something is an lvalue is discovered at the `=`.
///
/// | variant            | read                      | write                     |
/// |--------------------|---------------------------|---------------------------|
/// | `None`             | `NotReadable`             | `NotWritable`             |
/// | `Scalar`           | the number                | `NotWritable`             |
/// | `Identifier`       | scalar lookup, `NaN` if unset | scalar store          |
/// | `IndexedReference` | map entry, `NaN` if unset | map entry store           |
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Produced by statements that yield nothing, such as `@defmap`.
    None,
    /// A computed number. Read-only.
    Scalar(f64),
    /// A reference to the scalar with this name.
    Identifier(String),
    /// A reference to one entry of a map.
    IndexedReference {
        /// Name of the map.
        map:   String,
        /// Index of the entry, evaluated when the reference was built.
        index: f64,
    },
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl Value {
    /// Produces the number this value stands for.
    ///
    /// Unset scalars and unset map entries read as `NaN`.
    ///
    /// # Errors
    /// - [`RuntimeError::NotReadable`] for [`Value::None`].
    /// - [`RuntimeError::MapNotFound`] when indexing an undeclared map.
    ///
    /// # Example
    /// ```
    /// use defmap_calc::interpreter::{context::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// let a = Value::Identifier("a".to_string());
    /// assert!(a.read(&context).unwrap().is_nan());
    ///
    /// a.write(3.0, &mut context).unwrap();
    /// assert_eq!(a.read(&context).unwrap(), 3.0);
    /// ```
    pub fn read(&self, context: &Context) -> Result<f64, RuntimeError> {
        match self {
            Self::None => Err(RuntimeError::NotReadable { value: self.to_string() }),
            Self::Scalar(v) => Ok(*v),
            Self::Identifier(name) => Ok(context.read_scalar(name)),
            Self::IndexedReference { map, index } => context.read_map_entry(map, *index),
        }
    }

    /// Stores `value` into the location this value refers to.
    ///
    /// # Errors
    /// - [`RuntimeError::NotWritable`] for [`Value::None`] and
    ///   [`Value::Scalar`].
    /// - [`RuntimeError::AssignToMapName`] when an identifier names a map.
    /// - [`RuntimeError::MapNotFound`] when indexing an undeclared map.
    pub fn write(&self, value: f64, context: &mut Context) -> Result<(), RuntimeError> {
        match self {
            Self::None | Self::Scalar(_) => {
                Err(RuntimeError::NotWritable { value: self.to_string() })
            },
            Self::Identifier(name) => context.write_scalar(name, value),
            Self::IndexedReference { map, index } => context.write_map_entry(map, *index, value),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "a statement without a value"),
            Self::Scalar(v) => write!(f, "the computed value {v}"),
            Self::Identifier(name) => write!(f, "'{name}'"),
            Self::IndexedReference { map, index } => write!(f, "'{map}[{index}]'"),
        }
    }
}
