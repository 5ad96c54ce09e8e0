#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading or writing values.
pub enum RuntimeError {
    /// Tried to assign to a value that is not an lvalue.
    NotWritable {
        /// Description of the value that rejected the write.
        value: String,
    },
    /// Tried to read a value that carries no number.
    NotReadable {
        /// Description of the value that rejected the read.
        value: String,
    },
    /// Tried to assign a scalar to a name already declared as a map.
    AssignToMapName {
        /// The name of the map.
        name: String,
    },
    /// Indexed a map that was never declared.
    MapNotFound {
        /// The name that was looked up.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotWritable { value } => {
                write!(f, "Cannot assign to {value}: it is not an lvalue.")
            },
            Self::NotReadable { value } => write!(f, "{value} does not produce a number."),
            Self::AssignToMapName { name } => {
                write!(f, "Cannot assign a scalar to '{name}': it is declared as a map.")
            },
            Self::MapNotFound { name } => write!(f, "Map '{name}' not found."),
        }
    }
}

impl std::error::Error for RuntimeError {}
