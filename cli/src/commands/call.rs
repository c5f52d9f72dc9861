use anyhow::{Context, Result};
use bridge::{HostValue, Module};

/// A command-line argument as a host value: JSON when it parses, otherwise
/// the raw text.
pub fn parse_arg(raw: &str) -> HostValue {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(HostValue::from)
        .unwrap_or_else(|_| HostValue::text(raw))
}

/// Invoke `name` once and return its JSON-encoded result.
pub fn call_native(name: &str, raw_args: &[String]) -> Result<String> {
    let module = Module::new();
    let args: Vec<HostValue> = raw_args.iter().map(|a| parse_arg(a)).collect();
    let result = module
        .call(name, &args)
        .with_context(|| format!("{}() failed", name))?;
    Ok(serde_json::to_string(&result)?)
}

pub fn run_call(name: &str, raw_args: &[String]) -> Result<()> {
    println!("{}", call_native(name, raw_args)?);
    Ok(())
}
