/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;

#[doc(inline)]
pub use config::ComparisonConfig;
#[doc(inline)]
pub use config::GeneratorConfig;
#[doc(inline)]
pub use config::DEFAULT_MAX_TABLE_CELLS;
