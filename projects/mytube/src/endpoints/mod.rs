pub mod mytube;
