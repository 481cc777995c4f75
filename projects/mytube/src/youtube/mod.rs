pub mod activities;
pub mod activity_filter;
pub mod aggregate;
pub mod bulletin;
pub mod my_uploads;
pub mod paginate;
pub mod subscriptions;
