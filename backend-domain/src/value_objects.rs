// Domain value objects
pub mod db_time_zone;
pub mod tracked_categories;

pub use db_time_zone::*;
pub use tracked_categories::*;
