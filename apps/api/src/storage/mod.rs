// Resume persistence: in-memory store of saved documents with a JSON file
// mirror on disk. Memory is authoritative for reads; files are write-only.

pub mod handlers;
pub mod store;
