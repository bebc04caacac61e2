//! Public library API for encoding reflected object graphs as InfluxDB line protocol.

/// Schema and value model, graph walk, and line-protocol encoding.
pub mod line;
