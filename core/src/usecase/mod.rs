pub mod history;
pub mod tracker;

mod tracker_test;
