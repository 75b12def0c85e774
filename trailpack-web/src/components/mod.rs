pub mod distribution_board;
pub mod packing_list;
pub mod trip_form;

pub use distribution_board::DistributionBoard;
pub use packing_list::PackingList;
pub use trip_form::{DurationForm, TripDetailsForm};
