// Adapters layer: concrete sinks behind the domain output port.

pub mod output;

pub use output::{MemoryOutput, StdoutOutput};
