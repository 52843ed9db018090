pub mod batch;
pub mod context;
