/// External representations of instances, solutions and comparison reports
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export_item;
#[doc(inline)]
pub use export::export_report;
#[doc(inline)]
pub use export::export_solution;
#[doc(inline)]
pub use import::import_dimensions;
#[doc(inline)]
pub use import::import_instance;
