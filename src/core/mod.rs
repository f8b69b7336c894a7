pub mod cleanup;
pub mod discovery;
pub mod git;
