use anyhow::{bail, Context, Result};
use serde_json::Value;
use utilkit::{
    object_diffs, random_string, to_camel_case, to_currency, to_title_case, CurrencyFormat,
};

use crate::cli::{CurrencyArgs, DiffObjectsArgs, TextArgs};

/// Decode an argument as JSON, falling back to a plain string.
///
/// `42` becomes a number and `"42"` a string, while `abc` is taken as the
/// string it looks like.
pub fn loose_json(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn currency(args: CurrencyArgs) -> Result<()> {
    let format = CurrencyFormat {
        decimal: args.decimal,
        separator: args.separator,
    };
    println!("{}", to_currency(&loose_json(&args.value), &format)?);
    Ok(())
}

pub fn camel(args: TextArgs) -> Result<()> {
    println!("{}", to_camel_case(&args.text));
    Ok(())
}

pub fn title(args: TextArgs) -> Result<()> {
    println!("{}", to_title_case(&args.text));
    Ok(())
}

pub fn random() -> Result<()> {
    println!("{}", random_string());
    Ok(())
}

pub fn diff_objects(args: DiffObjectsArgs) -> Result<()> {
    let new = parse_object(&args.new, "NEW")?;
    let base = parse_object(&args.base, "BASE")?;
    let diff = object_diffs(&new, &base);
    println!("{}", Value::Object(diff));
    Ok(())
}

fn parse_object(raw: &str, name: &str) -> Result<serde_json::Map<String, Value>> {
    let value: Value =
        serde_json::from_str(raw).with_context(|| format!("{name} is not valid JSON"))?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("{name} must be a JSON object, got {other}"),
    }
}
