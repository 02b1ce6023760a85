use std::fmt;

use smol_str::SmolStr;

use crate::syntax::{FormatOptions, NodeFormatter};

/// Value types appearing in builtin signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    Any,
    Bool,
    Int,
    Float,
    Decimal,
    String,
    Bytes,
    Date,
    Timestamp,
    TimestampTz,
    Interval,
}

impl DataType {
    pub fn name(self) -> &'static str {
        match self {
            DataType::Any => "anyelement",
            DataType::Bool => "bool",
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Decimal => "decimal",
            DataType::String => "string",
            DataType::Bytes => "bytes",
            DataType::Date => "date",
            DataType::Timestamp => "timestamp",
            DataType::TimestampTz => "timestamptz",
            DataType::Interval => "interval",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Argument list accepted by one overload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgTypes {
    /// Exactly these arguments, in order.
    Fixed(Vec<DataType>),
    /// Any number of arguments of one type.
    Variadic(DataType),
}

/// How a builtin is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FunctionClass {
    #[default]
    Normal,
    Aggregate,
    Window,
}

/// One overload of a builtin function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builtin {
    pub class: FunctionClass,
    pub arg_types: ArgTypes,
    pub return_type: DataType,
    pub info: SmolStr,
}

impl Builtin {
    pub fn new(arg_types: ArgTypes, return_type: DataType) -> Self {
        Self {
            class: FunctionClass::Normal,
            arg_types,
            return_type,
            info: SmolStr::default(),
        }
    }

    /// An overload taking exactly `args`.
    pub fn fixed(args: &[DataType], return_type: DataType) -> Self {
        Self::new(ArgTypes::Fixed(args.to_vec()), return_type)
    }

    /// An overload taking any number of `arg`.
    pub fn variadic(arg: DataType, return_type: DataType) -> Self {
        Self::new(ArgTypes::Variadic(arg), return_type)
    }

    pub fn with_class(mut self, class: FunctionClass) -> Self {
        self.class = class;
        self
    }

    pub fn with_info(mut self, info: &str) -> Self {
        self.info = SmolStr::new(info);
        self
    }

    /// Human-readable signature, e.g. `(string, int) -> string`.
    pub fn signature(&self) -> String {
        let args = match &self.arg_types {
            ArgTypes::Fixed(types) => types
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", "),
            ArgTypes::Variadic(t) => format!("{t}..."),
        };
        format!("({args}) -> {}", self.return_type)
    }
}

/// A registered builtin function and all its overloads.
///
/// Each qualified name maps to exactly one definition, shared by every
/// query that refers to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    name: SmolStr,
    overloads: Vec<Builtin>,
}

impl FunctionDefinition {
    pub fn new(name: impl AsRef<str>, overloads: Vec<Builtin>) -> Self {
        Self {
            name: SmolStr::new(name),
            overloads,
        }
    }

    /// The fully qualified, lowercase name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overloads(&self) -> &[Builtin] {
        &self.overloads
    }

    pub fn is_aggregate(&self) -> bool {
        self.overloads
            .iter()
            .any(|overload| overload.class == FunctionClass::Aggregate)
    }
}

impl NodeFormatter for FunctionDefinition {
    fn format(&self, buf: &mut String, _options: &FormatOptions) {
        buf.push_str(&self.name);
    }
}

impl fmt::Display for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
