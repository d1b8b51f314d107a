pub mod event_ranks;
pub mod ranks;
pub mod run;
