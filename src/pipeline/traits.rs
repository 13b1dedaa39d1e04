// Map and reduce traits — the seam between job logic and the runner.
//
// The runner only knows these two traits. A job plugs in one Mapper, invoked
// once per input record (in parallel, on any worker), and one Reducer,
// invoked once per intermediate key with every value emitted under it.

/// One intermediate emission from a mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedRecord {
    /// Grouping key; every value with the same key reaches the same reduce call.
    pub key: String,
    pub value: String,
}

/// Per-record transform. Must be pure: the runner may call it from any
/// thread, in any order, and more than once for the same record.
pub trait Mapper: Send + Sync {
    /// Map a single input line. `None` drops the record.
    fn map(&self, record: &str) -> Option<KeyedRecord>;
}

/// Per-key aggregation over the full group of mapper values.
pub trait Reducer: Send + Sync {
    /// Reduce every value emitted under `key`, in arrival order, into
    /// output lines.
    fn reduce(&self, key: &str, values: Vec<String>) -> Vec<String>;
}
