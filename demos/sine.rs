use std::error::Error;

use omnipso::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let sine = FnCost::new(|x: &[Float]| x[0].sin()).with_dimension(1);
    let cosine = FnCost::new(|x: &[Float]| x[0].cos()).with_dimension(1);

    // Find the minimum of sin(x) in one period
    let config = PSOConfig::new((0.0, 2.0 * PI), Target::Minimize)
        .with_n_particles(30)
        .with_parameter_names(["x"]);
    let summary = optimize(&sine, config)?;
    println!("{summary}");

    // Find the maximum of cos(x) past its first peak
    let config = PSOConfig::new((0.8, 3.0 * PI), Target::Maximize).with_parameter_names(["x"]);
    let summary = optimize(&cosine, config)?;
    println!("{summary}");

    // Find where sin(x) = 0.6
    let config = PSOConfig::new((0.0, 0.5 * PI), "0.6".parse()?).with_parameter_names(["x"]);
    let summary = optimize(&sine, config)?;
    println!("{summary}");
    Ok(())
}
