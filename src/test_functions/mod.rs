/// Module containing the Sphere test function.
pub mod sphere;
pub use sphere::Sphere;

/// Module containing the Rastrigin test function.
pub mod rastrigin;
pub use rastrigin::Rastrigin;

/// Module containing the Ackley test function.
pub mod ackley;
pub use ackley::Ackley;
