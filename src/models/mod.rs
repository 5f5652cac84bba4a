pub mod filter;
pub mod trip;

pub use filter::{City, DayFilter, Filters, MonthFilter};
pub use trip::{Trip, TripTable};
