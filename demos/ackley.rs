use std::{error::Error, fs::File, io::BufWriter, path::Path};

use omnipso::{
    algorithms::particles::TrackingSwarmObserver, prelude::*, test_functions::Ackley,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Set up the swarm on a multimodal surface
    let config = PSOConfig::new((-5.0, 5.0), Target::Minimize)
        .with_n_particles(50)
        .with_max_steps(200)
        .with_convergence(0.0)
        .with_position_initializer(SwarmPositionInitializer::Independent)
        .with_parameter_names(["x", "y"]);

    // Create a tracker to record swarm history
    let tracker = TrackingSwarmObserver::build();

    let mut engine: Engine<PSO, SwarmStatus> = Engine::new(PSO::new(config))
        .with_observer(tracker.clone())
        .with_abort_signal(CtrlCAbortSignal::new());

    // Run the particle swarm optimizer
    engine.process(&Ackley { n: 2 }, &mut ())?;

    println!("{}", engine.result);

    // Export the history to a JSON file to visualize it elsewhere
    let mut writer = BufWriter::new(File::create(Path::new("data.json"))?);
    serde_json::to_writer(&mut writer, &*tracker.read())?;
    Ok(())
}
