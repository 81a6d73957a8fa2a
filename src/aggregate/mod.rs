pub mod appointments;
pub mod composite;
pub mod staff;
pub mod types;

pub use composite::{aggregate_snapshots, DaySnapshot};
pub use staff::{all_staff_profiles, build_staff_directory};
pub use types::{CompositeSchedule, DaySchedule, StaffDirectory, StaffProfile};
