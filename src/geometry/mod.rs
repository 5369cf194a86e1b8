pub mod hit_testing;

pub use hit_testing::{element_bounds, topmost_hit};
