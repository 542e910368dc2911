pub mod islands;

pub use islands::{heuristic, island_count};
