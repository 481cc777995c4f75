pub mod bulletins;
pub mod categories;
pub mod checkpoint;
pub mod mirror;
pub mod my_uploads;
pub mod new_uploads;
pub mod subscriptions;
pub mod uploads;
