pub mod factory;
pub mod iterators;
pub mod loops;
pub mod utils;

pub mod processor_trait;
