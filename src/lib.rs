//! array-processor: small, stateless operations over integer arrays.
//!
//! Every operation lives on the [`ArrayProcessor`] trait, which has two
//! interchangeable implementations (explicit loops and iterator adaptors)
//! selected through [`ProcessorConfig`] and [`build_processor`]. Inputs are
//! borrowed and results are freshly allocated, except for
//! [`replace_in_place`], which rewrites the caller's slice.
//!
//! Malformed arguments come back as [`ArrayError`]. Calls whose
//! preconditions leave no result to return (second max of a sequence without
//! two distinct values, filtering an empty sequence) panic instead.
pub mod config;
pub mod error;
pub mod math;
pub mod processors;

pub use config::{ProcessorConfig, ProcessorKind};
pub use error::{ArrayError, ArrayResult};
pub use math::{Array2, RowMatrix};
pub use processors::factory::build_processor;
pub use processors::iterators::IterProcessor;
pub use processors::loops::LoopProcessor;
pub use processors::processor_trait::ArrayProcessor;
pub use processors::utils::replace_in_place;
