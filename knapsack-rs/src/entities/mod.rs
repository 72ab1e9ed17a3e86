mod instance;
mod item;
mod solution;

#[doc(inline)]
pub use instance::KPInstance;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use solution::KPSolution;

#[doc(inline)]
pub use solution::DPSolution;
