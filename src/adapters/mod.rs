// Adapters layer: concrete implementations for external systems (http, tables, storage).

pub mod fetcher;
pub mod storage;
pub mod table;
