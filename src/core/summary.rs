use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    core::{Domain, Target},
    Float,
};

/// A struct that holds the results of a particle swarm optimization run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwarmSummary {
    /// The best position found by the swarm.
    pub x: Vec<Float>,
    /// The value of the objective at [`SwarmSummary::x`].
    pub fx: Float,
    /// The target the swarm was optimizing for.
    pub target: Target,
    /// The search domain of every coordinate.
    pub domain: Domain,
    /// Flag that says whether or not the convergence criterion was met.
    pub converged: bool,
    /// A message describing why the run ended.
    pub message: String,
    /// The number of steps taken.
    pub iterations: usize,
    /// The number of objective evaluations.
    pub cost_evals: usize,
    /// The names of the parameters. This is `None` if no names were set.
    pub parameter_names: Option<Vec<String>>,
    /// The global best value after each step.
    pub best_history: Vec<Float>,
    /// The mean distance of the particles from the global best after each step.
    pub distance_history: Vec<Float>,
}

impl SwarmSummary {
    /// The best position and its value.
    pub fn best(&self) -> (Vec<Float>, Float) {
        (self.x.clone(), self.fx)
    }

    /// Set the names associated with each parameter.
    pub fn with_parameter_names(mut self, parameter_names: &[String]) -> Self {
        self.parameter_names = Some(parameter_names.to_vec());
        self
    }
}

const WIDTH: usize = 60;

fn rule(f: &mut std::fmt::Formatter<'_>, left: char, right: char) -> std::fmt::Result {
    writeln!(f, "{left}{}{right}", "─".repeat(WIDTH))
}

// Rows longer than the box are wrapped onto continuation lines.
fn row(f: &mut std::fmt::Formatter<'_>, text: &str) -> std::fmt::Result {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return writeln!(f, "│ {:<width$} │", "", width = WIDTH - 2);
    }
    for chunk in chars.chunks(WIDTH - 2) {
        let line: String = chunk.iter().collect();
        writeln!(f, "│ {:<width$} │", line, width = WIDTH - 2)?;
    }
    Ok(())
}

impl Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        rule(f, '╭', '╮')?;
        writeln!(f, "│{:^width$}│", "SWARM RESULTS", width = WIDTH)?;
        rule(f, '├', '┤')?;
        row(
            f,
            &format!(
                "{:<14}{:<16}{:<14}{}",
                "Status",
                "f(x)",
                "#Steps",
                "#f(x)"
            ),
        )?;
        row(
            f,
            &format!(
                "{:<14}{:<16}{:<14}{}",
                if self.converged {
                    "Converged"
                } else {
                    "Not Converged"
                },
                format!("{:.5}", self.fx),
                self.iterations,
                self.cost_evals
            ),
        )?;
        rule(f, '├', '┤')?;
        row(f, &format!("Target: {}    Domain: {}", self.target, self.domain))?;
        row(f, &format!("Message: {}", self.message))?;
        rule(f, '├', '┤')?;
        row(f, &format!("{:<20}{}", "Parameter", "="))?;
        for (i, value) in self.x.iter().enumerate() {
            let name = self
                .parameter_names
                .as_ref()
                .and_then(|names| names.get(i).cloned())
                .unwrap_or_else(|| format!("x_{i}"));
            row(f, &format!("{:<20}{:.5}", name, value))?;
        }
        rule(f, '╰', '╯')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SwarmSummary {
        SwarmSummary {
            x: vec![1.0, -2.5],
            fx: 0.25,
            target: Target::Minimize,
            domain: Domain::new(-5.0, 5.0),
            converged: true,
            message: "Best value changed by less than 0.001".to_string(),
            iterations: 12,
            cost_evals: 325,
            parameter_names: None,
            best_history: vec![1.0, 0.5, 0.25],
            distance_history: vec![3.0, 2.0, 1.0],
        }
    }

    #[test]
    fn test_best() {
        assert_eq!(summary().best(), (vec![1.0, -2.5], 0.25));
    }

    #[test]
    fn test_display() {
        let text = summary().to_string();
        assert!(text.contains("SWARM RESULTS"));
        assert!(text.contains("Converged"));
        assert!(text.contains("0.25000"));
        assert!(text.contains("x_1"));
        assert!(text.contains("-2.50000"));
        assert!(text.contains("[-5, 5]"));

        let named = summary().with_parameter_names(&["alpha".to_string(), "beta".to_string()]);
        let text = named.to_string();
        assert!(text.contains("alpha"));
        assert!(text.contains("beta"));
        assert!(!text.contains("x_0"));
    }

    #[test]
    fn test_display_wraps_long_rows() {
        let mut long = summary();
        long.message = "Mean distance from the global best fell below 0.001".to_string();
        long.fx = Float::MAX;
        let text = long.to_string();
        assert!(text.lines().count() > summary().to_string().lines().count());
        for line in text.lines() {
            assert_eq!(line.chars().count(), WIDTH + 2, "{line}");
        }
        assert!(text.contains("Message: Mean distance from the global best fell"));
    }
}
