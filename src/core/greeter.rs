use crate::adapters::output::StdoutOutput;
use crate::domain::model::{Success, Value};
use crate::domain::ports::Output;

pub const GREETING_PREFIX: &str = "Hello World: ";

/// The greeting line for `value`, without its terminator.
pub fn format_greeting(value: &Value) -> String {
    format!("{}{}", GREETING_PREFIX, value)
}

/// Prints `Hello World: <value>` to standard output.
///
/// Never fails. A broken stdout is logged and otherwise ignored.
pub fn world<V: Into<Value>>(value: V) -> Success {
    Greeter::stdout().world(value)
}

#[derive(Debug, Clone, Default)]
pub struct Greeter<O: Output> {
    output: O,
}

impl Greeter<StdoutOutput> {
    pub fn stdout() -> Self {
        Self::new(StdoutOutput)
    }
}

impl<O: Output> Greeter<O> {
    pub fn new(output: O) -> Self {
        Self { output }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn world<V: Into<Value>>(&self, value: V) -> Success {
        let line = format_greeting(&value.into());
        tracing::debug!(line = %line, "greeting");

        if let Err(e) = self.output.write_line(&line) {
            tracing::warn!("Failed to write greeting: {}", e);
        }
        Success
    }
}
