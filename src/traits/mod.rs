/// Module containing the [`AbortSignal`] trait.
pub mod abort_signal;
/// Module containing the [`Algorithm`] trait.
pub mod algorithm;
/// Module containing the [`CostFunction`] trait and the [`FnCost`] adapter.
pub mod cost_function;
/// Module containing the [`Observer`] trait.
pub mod observer;
/// Module containing the [`RandomSource`] trait.
pub mod random_source;
/// Module containing the [`Status`] trait.
pub mod status;

pub use abort_signal::AbortSignal;
pub use algorithm::Algorithm;
pub use cost_function::{CostFunction, FnCost};
pub use observer::Observer;
pub use random_source::RandomSource;
pub use status::Status;
