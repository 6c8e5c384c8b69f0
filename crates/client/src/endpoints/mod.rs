// Each module adds the operations for one resource to `TronaldClient`

pub mod quotes;
pub mod search;
pub mod tags;
pub(crate) mod wire;
