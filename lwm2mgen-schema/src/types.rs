//! Core LwM2M schema types.
//!
//! This module contains the closed enumerations of the OMA DDF resource
//! model: value types, operation sets, instance cardinality and presence.

use std::fmt;

/// LwM2M resource value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Boolean value.
    Boolean,
    /// Signed 32-bit integer value.
    Integer,
    /// Floating point value.
    Float,
    /// UTF-8 string value.
    String,
    /// Opaque byte sequence.
    Opaque,
    /// Unix timestamp (signed 64-bit).
    Time,
    /// Object link (OID:IID pair).
    Objlnk,
}

impl ValueType {
    /// Parses a value type from its DDF spelling.
    ///
    /// Matching is case-insensitive and accepts the common short
    /// spellings (`bool`, `int`, `str`) alongside the canonical ones.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "boolean" | "bool" => Some(Self::Boolean),
            "integer" | "int" => Some(Self::Integer),
            "float" => Some(Self::Float),
            "string" | "str" => Some(Self::String),
            "opaque" => Some(Self::Opaque),
            "time" => Some(Self::Time),
            "objlnk" => Some(Self::Objlnk),
            _ => None,
        }
    }

    /// Returns the canonical lowercase DDF spelling.
    #[must_use]
    pub const fn ddf_name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Opaque => "opaque",
            Self::Time => "time",
            Self::Objlnk => "objlnk",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ddf_name())
    }
}

/// Set of operations a resource supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Operations {
    /// Resource is readable (R).
    pub read: bool,
    /// Resource is writable (W).
    pub write: bool,
    /// Resource is executable (E).
    pub execute: bool,
}

impl Operations {
    /// Parses an operation set from a DDF `Operations` string such as
    /// `"RW"` or `"E"`.
    ///
    /// Letters may appear in any order and case; whitespace is ignored.
    /// Returns `None` on any unrecognized letter.  The empty string
    /// parses to the empty set, which validation rejects later.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut ops = Self::default();
        for ch in s.chars() {
            match ch {
                'R' | 'r' => ops.read = true,
                'W' | 'w' => ops.write = true,
                'E' | 'e' => ops.execute = true,
                c if c.is_ascii_whitespace() => {}
                _ => return None,
            }
        }
        Some(ops)
    }

    /// Returns true if no operation is allowed.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.read && !self.write && !self.execute
    }
}

impl fmt::Display for Operations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.read {
            f.write_str("R")?;
        }
        if self.write {
            f.write_str("W")?;
        }
        if self.execute {
            f.write_str("E")?;
        }
        Ok(())
    }
}

/// Instance cardinality of an object or resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cardinality {
    /// At most one instance.
    #[default]
    Single,
    /// Any number of instances.
    Multiple,
}

impl Cardinality {
    /// Parses cardinality from a DDF `MultipleInstances` string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" => Some(Self::Single),
            "multiple" => Some(Self::Multiple),
            _ => None,
        }
    }

    /// Returns true for the multiple-instance case.
    #[must_use]
    pub const fn is_multiple(self) -> bool {
        matches!(self, Self::Multiple)
    }

    /// Returns the DDF label, as used in generated comments.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Multiple => "Multiple",
        }
    }
}

/// Whether an object or resource is mandatory to implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Presence {
    /// Implementation is required.
    Mandatory,
    /// Implementation is optional.
    #[default]
    Optional,
}

impl Presence {
    /// Parses presence from a DDF `Mandatory` string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mandatory" => Some(Self::Mandatory),
            "optional" => Some(Self::Optional),
            _ => None,
        }
    }

    /// Returns true if implementation is required.
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::Mandatory)
    }

    /// Returns the DDF label, as used in generated comments.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mandatory => "Mandatory",
            Self::Optional => "Optional",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_parse() {
        assert_eq!(ValueType::parse("Integer"), Some(ValueType::Integer));
        assert_eq!(ValueType::parse("integer"), Some(ValueType::Integer));
        assert_eq!(ValueType::parse("int"), Some(ValueType::Integer));
        assert_eq!(ValueType::parse("Boolean"), Some(ValueType::Boolean));
        assert_eq!(ValueType::parse("bool"), Some(ValueType::Boolean));
        assert_eq!(ValueType::parse("String"), Some(ValueType::String));
        assert_eq!(ValueType::parse("Opaque"), Some(ValueType::Opaque));
        assert_eq!(ValueType::parse("Time"), Some(ValueType::Time));
        assert_eq!(ValueType::parse("Objlnk"), Some(ValueType::Objlnk));
        assert_eq!(ValueType::parse("Float"), Some(ValueType::Float));
        assert_eq!(ValueType::parse("Corelnk"), None);
        assert_eq!(ValueType::parse(""), None);
    }

    #[test]
    fn test_value_type_ddf_name() {
        assert_eq!(ValueType::Objlnk.ddf_name(), "objlnk");
        assert_eq!(ValueType::Time.to_string(), "time");
    }

    #[test]
    fn test_operations_parse() {
        let rw = Operations::parse("RW").unwrap();
        assert!(rw.read);
        assert!(rw.write);
        assert!(!rw.execute);

        let e = Operations::parse("E").unwrap();
        assert!(!e.read);
        assert!(!e.write);
        assert!(e.execute);

        let lower = Operations::parse("rw").unwrap();
        assert_eq!(lower, rw);

        let empty = Operations::parse("").unwrap();
        assert!(empty.is_empty());

        assert_eq!(Operations::parse("RX"), None);
    }

    #[test]
    fn test_operations_display() {
        assert_eq!(Operations::parse("WR").unwrap().to_string(), "RW");
        assert_eq!(Operations::parse("E").unwrap().to_string(), "E");
    }

    #[test]
    fn test_cardinality_parse() {
        assert_eq!(Cardinality::parse("Multiple"), Some(Cardinality::Multiple));
        assert_eq!(Cardinality::parse("single"), Some(Cardinality::Single));
        assert_eq!(Cardinality::parse("Many"), None);
        assert!(Cardinality::Multiple.is_multiple());
        assert_eq!(Cardinality::Single.label(), "Single");
    }

    #[test]
    fn test_presence_parse() {
        assert_eq!(Presence::parse("Mandatory"), Some(Presence::Mandatory));
        assert_eq!(Presence::parse("optional"), Some(Presence::Optional));
        assert_eq!(Presence::parse("Required"), None);
        assert!(Presence::Mandatory.is_mandatory());
        assert_eq!(Presence::Optional.label(), "Optional");
    }
}
