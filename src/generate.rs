//! Random connected test graphs.
//!
//! Each graph first gets a random spanning tree (vertex `i` attached to a random
//! earlier vertex) so it is always connected, then random extra edges up to a
//! target density. No self loops and no repeated vertex pairs are produced.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub num_graphs: usize,
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Edge density range; the target edge count is `V * (V - 1) * density`.
    pub min_density: f64,
    pub max_density: f64,
    /// Weights are drawn from `1..max_weight`.
    pub max_weight: u32,
    /// Fixed seed for reproducible batches; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_graphs: 5,
            min_vertices: 5,
            max_vertices: 30,
            min_density: 0.1,
            max_density: 0.3,
            max_weight: 100,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> Result<()> {
        if self.min_vertices > self.max_vertices {
            return Err(GraphError::invalid_input(format!(
                "min_vertices ({}) exceeds max_vertices ({})",
                self.min_vertices, self.max_vertices
            )));
        }
        if !(0.0..=1.0).contains(&self.min_density) || self.min_density >= self.max_density {
            return Err(GraphError::invalid_input(format!(
                "invalid density range {}..{}",
                self.min_density, self.max_density
            )));
        }
        if self.max_weight < 2 {
            return Err(GraphError::invalid_input("max_weight must be at least 2"));
        }
        Ok(())
    }
}

/// Name for vertex `index`: `A`..`Z`, then `AA`, `AB`, ...
pub fn vertex_name(index: usize) -> String {
    let mut name = String::new();
    let mut i = index + 1;
    while i > 0 {
        i -= 1;
        name.insert(0, (b'A' + (i % 26) as u8) as char);
        i /= 26;
    }
    name
}

/// Generates `config.num_graphs` connected graphs with ids `1..=num_graphs`.
pub fn generate_batch(config: &GeneratorConfig) -> Result<Vec<Graph<u32>>> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    Ok((1..=config.num_graphs)
        .map(|id| generate_graph(&mut rng, id as i64, config))
        .collect())
}

fn generate_graph<R: Rng>(rng: &mut R, id: i64, config: &GeneratorConfig) -> Graph<u32> {
    let vertices = rng.gen_range(config.min_vertices..=config.max_vertices);
    let density = rng.gen_range(config.min_density..config.max_density);
    let target = ((vertices * vertices.saturating_sub(1)) as f64 * density) as usize;

    let mut graph = Graph::new(id, (0..vertices).map(vertex_name));
    let mut seen: HashSet<(usize, usize)> = HashSet::new();

    for to in 1..vertices {
        let from = rng.gen_range(0..to);
        add_edge(rng, &mut graph, &mut seen, from, to, config.max_weight);
    }

    let extra = target.saturating_sub(vertices.saturating_sub(1));
    let max_attempts = target * 10;
    let mut added = 0;
    let mut attempts = 0;
    while added < extra && attempts < max_attempts {
        attempts += 1;
        let from = rng.gen_range(0..vertices);
        let to = rng.gen_range(0..vertices);
        if from != to && !seen.contains(&(from.min(to), from.max(to))) {
            add_edge(rng, &mut graph, &mut seen, from, to, config.max_weight);
            added += 1;
        }
    }

    debug!(
        "generated graph {} ({} vertices, {} edges)",
        id,
        vertices,
        graph.edge_count()
    );
    graph
}

fn add_edge<R: Rng>(
    rng: &mut R,
    graph: &mut Graph<u32>,
    seen: &mut HashSet<(usize, usize)>,
    from: usize,
    to: usize,
    max_weight: u32,
) {
    seen.insert((from.min(to), from.max(to)));
    graph.add_edge(vertex_name(from), vertex_name(to), rng.gen_range(1..max_weight));
}
