/// Module containing the [`AbortSignal`](crate::traits::AbortSignal) implementations.
pub mod abort_signal;
pub use abort_signal::{AtomicAbortSignal, CtrlCAbortSignal, NopAbortSignal};

/// Module containing the search [`Domain`].
pub mod domain;
pub use domain::Domain;

/// Module containing the [`Engine`] which runs algorithms.
pub mod engine;
pub use engine::Engine;

/// Module containing distance measures, the rectifier, and [`BoundaryMethod`]s.
pub mod geometry;
pub use geometry::{euclidean_distance, mean_distance, rectify, BoundaryMethod};

/// Module containing general-purpose [`Observer`](crate::traits::Observer)s.
pub mod observers;
pub use observers::DebugObserver;

/// Module containing the [`Point`] type.
pub mod point;
pub use point::Point;

/// Module containing the default random source.
pub mod rng;
pub use rng::Lcg;

/// Module containing the [`SwarmSummary`] type.
pub mod summary;
pub use summary::SwarmSummary;

/// Module containing the optimization [`Target`].
pub mod target;
pub use target::Target;
