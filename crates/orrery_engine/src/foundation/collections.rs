//! Specialized collection types

pub use slotmap::SlotMap;

/// Handle-based map using slot map for stable references
///
/// Keys are generational: a key minted by one map never resolves in
/// another, and a default (never-inserted) key resolves nowhere. This is
/// what backs stale-handle detection throughout the engine.
pub type HandleMap<K, V> = SlotMap<K, V>;
