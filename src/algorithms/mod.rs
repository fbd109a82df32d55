/// Particle swarm optimization and the types it is built from.
pub mod particles;
