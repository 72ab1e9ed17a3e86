//! Greedy and exact dynamic-programming solvers for the 0/1 knapsack problem,
//! plus a random instance generator and a facade comparing both solvers on the same instance.

/// Entities to model 0/1 knapsack instances and their solutions
pub mod entities;

/// Random generation of problem instances
pub mod generator;

/// The greedy and the dynamic-programming solver
pub mod solvers;

/// Runs both solvers on one instance and bundles the results
pub mod compare;

/// Importing instances into and exporting reports out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::KnapsackError;
