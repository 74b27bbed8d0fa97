use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use serde::{Serialize, Deserialize};
use crate::error::Result;

pub mod pack;

mod float;

mod categorical;

mod binary;

pub use float::*;

pub use categorical::*;

pub use binary::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Float,
    Categorical,
    Binary
}

impl Display for AttributeKind {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Float => write!(f, "float"),
            AttributeKind::Categorical => write!(f, "categorical"),
            AttributeKind::Binary => write!(f, "binary"),
        }
    }

}

/// Run-time type of a column. Attributes know how to convert between
/// user-facing strings and the packed system representation held by
/// attribute groups.
///
/// Equality and hashing consider only the kind and the name, so an attribute
/// keeps its identity while a categorical dictionary grows. Use
/// `strictly_equal` to also compare precision and dictionary contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Attribute {
    Float(FloatAttribute),
    Categorical(CategoricalAttribute),
    Binary(BinaryAttribute)
}

impl Attribute {

    pub fn float(name : &str) -> Self {
        Attribute::Float(FloatAttribute::new(name))
    }

    pub fn categorical(name : &str, values : &[&str]) -> Self {
        Attribute::Categorical(CategoricalAttribute::with_values(name, values))
    }

    pub fn binary(name : &str) -> Self {
        Attribute::Binary(BinaryAttribute::new(name))
    }

    pub fn name(&self) -> &str {
        match self {
            Attribute::Float(a) => &a.name[..],
            Attribute::Categorical(a) => &a.name[..],
            Attribute::Binary(a) => &a.name[..]
        }
    }

    pub fn set_name(&mut self, name : &str) {
        match self {
            Attribute::Float(a) => a.name = name.to_string(),
            Attribute::Categorical(a) => a.name = name.to_string(),
            Attribute::Binary(a) => a.name = name.to_string()
        }
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Float(_) => AttributeKind::Float,
            Attribute::Categorical(_) => AttributeKind::Categorical,
            Attribute::Binary(_) => AttributeKind::Binary
        }
    }

    /// Number of bytes a single value occupies when read or written.
    pub fn value_width(&self) -> usize {
        match self {
            Attribute::Binary(_) => 1,
            _ => pack::WORD
        }
    }

    /// Converts a user string into the packed representation. Categorical
    /// attributes register unseen values in their dictionary.
    pub fn sys_val_from_str(&mut self, s : &str) -> Result<Vec<u8>> {
        match self {
            Attribute::Float(a) => a.sys_val_from_str(s),
            Attribute::Categorical(a) => a.sys_val_from_str(s),
            Attribute::Binary(a) => a.sys_val_from_str(s)
        }
    }

    pub fn str_from_sys_val(&self, bytes : &[u8]) -> Result<String> {
        match self {
            Attribute::Float(a) => a.str_from_sys_val(bytes),
            Attribute::Categorical(a) => a.str_from_sys_val(bytes),
            Attribute::Binary(a) => a.str_from_sys_val(bytes)
        }
    }

    pub fn compatible(&self, other : &Attribute) -> bool {
        self.kind() == other.kind()
    }

    pub fn strictly_equal(&self, other : &Attribute) -> bool {
        match (self, other) {
            (Attribute::Float(a), Attribute::Float(b)) => a.name == b.name && a.precision == b.precision,
            (Attribute::Categorical(a), Attribute::Categorical(b)) => a.name == b.name && a.values == b.values,
            (Attribute::Binary(a), Attribute::Binary(b)) => a.name == b.name,
            _ => false
        }
    }

}

impl PartialEq for Attribute {

    fn eq(&self, other : &Self) -> bool {
        self.kind() == other.kind() && self.name() == other.name()
    }

}

impl Eq for Attribute { }

impl Hash for Attribute {

    fn hash<H : Hasher>(&self, state : &mut H) {
        self.kind().hash(state);
        self.name().hash(state);
    }

}

impl Display for Attribute {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Categorical(a) => write!(f, "{} ({}: {})", a.name, self.kind(), a.values.join(", ")),
            _ => write!(f, "{} ({})", self.name(), self.kind())
        }
    }

}

/// Locates an attribute inside a grid: the attribute group index and the
/// position of the attribute within that group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSpec {

    pub group : usize,

    pub position : usize,

    pub attribute : Attribute
}

impl AttributeSpec {

    pub fn new(group : usize, position : usize, attribute : Attribute) -> Self {
        Self { group, position, attribute }
    }

}
