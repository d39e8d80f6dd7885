//! Sequential composition of algorithms.

use crate::error::Result;
use crate::graph::Graph;

use super::cull::cull;
use super::progress::Progress;
use super::settings::AlgorithmSettings;
use super::Algorithm;

/// Runs several algorithms on the same graph and culls the combined
/// results once.
///
/// While member `k` of `n` runs, the bundle publishes
/// `(k + member_progress / 2) / n`, and `(k + 1) / n` once it returns.
pub struct Bundle {
    algorithms: Vec<Box<dyn Algorithm>>,
    settings: AlgorithmSettings,
}

impl Bundle {
    /// Creates a bundle.
    #[must_use]
    pub fn new(algorithms: Vec<Box<dyn Algorithm>>, settings: AlgorithmSettings) -> Self {
        Self {
            algorithms,
            settings,
        }
    }

    /// Appends a member algorithm.
    pub fn push(&mut self, algorithm: Box<dyn Algorithm>) {
        self.algorithms.push(algorithm);
    }

    /// Returns the number of member algorithms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Returns true if the bundle has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl Algorithm for Bundle {
    fn name(&self) -> &str {
        "Bundle"
    }

    fn settings(&self) -> &AlgorithmSettings {
        &self.settings
    }

    #[allow(clippy::cast_precision_loss)] // member counts are tiny
    fn process(&self, graph: &Graph, progress: &mut Progress<'_>) -> Result<Vec<Graph>> {
        progress.begin();
        let count = self.algorithms.len();
        let mut results = Vec::new();

        for (done, algorithm) in self.algorithms.iter().enumerate() {
            tracing::debug!(member = algorithm.name(), "Bundle member started");
            let produced = {
                let mut member = Progress::from_callback(|event| {
                    let share = (done as f64 + event.new / 2.0) / count as f64;
                    if let Err(e) = progress.set(share) {
                        tracing::warn!(error = %e, "Dropped bundle progress update");
                    }
                });
                algorithm.process(graph, &mut member)?
            };
            results.extend(produced);
            progress.set_fraction(done + 1, count)?;
        }

        progress.finish()?;
        Ok(cull(results, &self.settings))
    }
}
