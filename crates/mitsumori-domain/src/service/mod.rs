//! Domain services - the pricing core

pub mod box_aggregator;
pub mod distance_resolver;
pub mod estimate_calculator;
pub mod option_pricer;
pub mod truck_selector;

pub use box_aggregator::total_boxes;
pub use distance_resolver::{resolve_distance, DEFAULT_PAIR_DISTANCE_KM};
pub use estimate_calculator::compute_estimate;
pub use option_pricer::total_option_price;
pub use truck_selector::cheapest_tier;
