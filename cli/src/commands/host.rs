//! In-process host: the natives are installed into a [`GlobalScope`] and
//! called from stdin while the main thread parks in [`Session::run`].

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;

use anyhow::{anyhow, Context, Result};
use bridge::{GlobalScope, HostValue, Module, Session, ShutdownSignal};
use tracing::debug;

/// Split `name <json>...` into the name and its arguments.
pub fn parse_call(line: &str) -> Result<(String, Vec<HostValue>)> {
    let line = line.trim();
    let (name, rest) = match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], &line[pos..]),
        None => (line, ""),
    };

    let args = serde_json::Deserializer::from_str(rest)
        .into_iter::<serde_json::Value>()
        .map(|v| v.map(HostValue::from))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid arguments for {}", name))?;

    Ok((name.to_string(), args))
}

fn evaluate(scope: &GlobalScope, line: &str) -> Result<String> {
    let (name, args) = parse_call(line)?;
    let result = scope.call(&name, &args)?;
    Ok(serde_json::to_string(&result)?)
}

/// Answer one call per input line until end of input. Blank lines and
/// `#` comments are skipped; failed calls print `error: <message>`.
pub fn evaluate_lines<R: BufRead, W: Write>(scope: &GlobalScope, input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        debug!(call = trimmed, "host call");
        match evaluate(scope, trimmed) {
            Ok(json) => writeln!(output, "{}", json)?,
            Err(e) => writeln!(output, "error: {:#}", e)?,
        }
        output.flush()?;
    }
    Ok(())
}

struct TriggerOnDrop(ShutdownSignal);

impl Drop for TriggerOnDrop {
    fn drop(&mut self) {
        self.0.trigger();
    }
}

pub fn host_session<R, W>(input: R, output: W) -> Result<()>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    let mut scope = GlobalScope::new();
    let session = Session::start(Module::new(), &mut scope)?;
    let scope = Arc::new(scope);
    let signal = session.shutdown_signal();

    let reader = thread::spawn(move || {
        // End of input (or a panic) is the host going away.
        let _stop = TriggerOnDrop(signal);
        evaluate_lines(&scope, input, output)
    });

    session.run();
    reader
        .join()
        .map_err(|_| anyhow!("Host input thread panicked"))?
}

pub fn run_host() -> Result<()> {
    host_session(io::BufReader::new(io::stdin()), io::stdout())
}
