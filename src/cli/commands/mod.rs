pub mod branches;
pub mod completion;
pub mod config;
