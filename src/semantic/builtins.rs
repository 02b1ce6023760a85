//! The standard builtin catalogue.
//!
//! [`standard_registry`] is the startup routine: every builtin lives under
//! `pg_catalog`, and most of them are also exposed without a prefix. The
//! timestamp functions `now` and `transaction_timestamp` are only reachable
//! qualified or through a search path that lists `pg_catalog`.

use crate::semantic::error::RegistryError;
use crate::semantic::registry::{
    Builtin, DataType, FunctionClass, FunctionRegistry, RegistryBuilder,
};

/// Namespace holding the builtin functions.
pub const PG_CATALOG: &str = "pg_catalog";

/// Build the registry containing every standard builtin.
pub fn standard_registry() -> Result<FunctionRegistry, RegistryError> {
    let mut builder = RegistryBuilder::new();
    register_string_functions(&mut builder)?;
    register_math_functions(&mut builder)?;
    register_datetime_functions(&mut builder)?;
    register_aggregates(&mut builder)?;
    register_window_functions(&mut builder)?;
    Ok(builder.build())
}

/// Register `pg_catalog.<name>` without an unqualified alias.
fn register_qualified(
    builder: &mut RegistryBuilder,
    name: &str,
    overloads: Vec<Builtin>,
) -> Result<String, RegistryError> {
    let qualified = format!("{PG_CATALOG}.{name}");
    builder.register(&qualified, overloads)?;
    Ok(qualified)
}

/// Register `pg_catalog.<name>` plus the unqualified alias `<name>`.
fn register_exposed(
    builder: &mut RegistryBuilder,
    name: &str,
    overloads: Vec<Builtin>,
) -> Result<(), RegistryError> {
    let qualified = register_qualified(builder, name, overloads)?;
    builder.register_alias(name, &qualified)
}

fn register_string_functions(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    use DataType as T;

    register_exposed(
        builder,
        "lower",
        vec![
            Builtin::fixed(&[T::String], T::String)
                .with_info("Converts all characters to lowercase."),
        ],
    )?;
    register_exposed(
        builder,
        "upper",
        vec![
            Builtin::fixed(&[T::String], T::String)
                .with_info("Converts all characters to uppercase."),
        ],
    )?;
    register_exposed(
        builder,
        "length",
        vec![
            Builtin::fixed(&[T::String], T::Int).with_info("Number of characters."),
            Builtin::fixed(&[T::Bytes], T::Int).with_info("Number of bytes."),
        ],
    )?;
    register_exposed(
        builder,
        "concat",
        vec![Builtin::variadic(T::String, T::String).with_info("Concatenates its arguments.")],
    )?;
    register_exposed(
        builder,
        "substring",
        vec![
            Builtin::fixed(&[T::String, T::Int], T::String),
            Builtin::fixed(&[T::String, T::Int, T::Int], T::String),
        ],
    )
}

fn register_math_functions(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    use DataType::{Decimal, Float, Int};

    register_exposed(
        builder,
        "abs",
        vec![
            Builtin::fixed(&[Int], Int),
            Builtin::fixed(&[Float], Float),
            Builtin::fixed(&[Decimal], Decimal),
        ],
    )?;
    register_exposed(
        builder,
        "round",
        vec![
            Builtin::fixed(&[Float], Float),
            Builtin::fixed(&[Decimal, Int], Decimal),
        ],
    )?;
    register_exposed(builder, "random", vec![Builtin::fixed(&[], Float)])
}

fn register_datetime_functions(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    use DataType::{Date, TimestampTz};

    register_qualified(
        builder,
        "now",
        vec![Builtin::fixed(&[], TimestampTz).with_info("Current transaction timestamp.")],
    )?;
    register_qualified(
        builder,
        "transaction_timestamp",
        vec![Builtin::fixed(&[], TimestampTz)],
    )?;
    register_exposed(builder, "current_date", vec![Builtin::fixed(&[], Date)])
}

fn register_aggregates(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    use DataType::{Any, Decimal, Float, Int};

    let aggregate = |args: &[DataType], ret: DataType| {
        Builtin::fixed(args, ret).with_class(FunctionClass::Aggregate)
    };

    register_exposed(
        builder,
        "count",
        vec![aggregate(&[Any], Int), aggregate(&[], Int).with_info("count(*)")],
    )?;
    register_exposed(
        builder,
        "sum",
        vec![
            aggregate(&[Int], Decimal),
            aggregate(&[Float], Float),
            aggregate(&[Decimal], Decimal),
        ],
    )?;
    register_exposed(
        builder,
        "avg",
        vec![
            aggregate(&[Int], Decimal),
            aggregate(&[Float], Float),
            aggregate(&[Decimal], Decimal),
        ],
    )?;
    register_exposed(builder, "min", vec![aggregate(&[Any], Any)])?;
    register_exposed(builder, "max", vec![aggregate(&[Any], Any)])
}

fn register_window_functions(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    let window = |ret: DataType| Builtin::fixed(&[], ret).with_class(FunctionClass::Window);

    register_exposed(builder, "row_number", vec![window(DataType::Int)])?;
    register_exposed(builder, "rank", vec![window(DataType::Int)])
}
