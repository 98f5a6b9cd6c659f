// Adapters layer: concrete sinks for rendered output.

pub mod sink;
