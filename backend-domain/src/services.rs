// Domain services: pure computations over fetched events

pub mod aggregator;
pub mod pagination;

pub use aggregator::*;
pub use pagination::*;
