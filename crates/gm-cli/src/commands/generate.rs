use std::error::Error;

use clap::Args;
use gm_graph::{generate, Family, GeneratorSpec, Graph, GraphConfig, Layout};
use gm_store::GraphLibrary;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Family to build: cycle, petersen, complete, wheel or complete_bipartite.
    #[arg(value_parser = parse_family)]
    pub family: Family,
    /// Name the generated graph is stored under.
    #[arg(long)]
    pub name: String,
    /// Vertex count (ring size for petersen, top row for complete_bipartite).
    #[arg(long, default_value_t = 5)]
    pub n: usize,
    /// Outer ring step of the Petersen family.
    #[arg(long, default_value_t = 2)]
    pub k: usize,
    /// Index step of the cycle family.
    #[arg(long, default_value_t = 1)]
    pub skip: usize,
    /// Rotation offset of the cycle family.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
    /// Bottom row size of the complete bipartite family.
    #[arg(long, default_value_t = 3)]
    pub n2: usize,
    /// Vertical distance between the bipartite rows.
    #[arg(long, default_value_t = 120.0)]
    pub gap: f64,
}

impl GenerateArgs {
    pub fn spec(&self) -> GeneratorSpec {
        match self.family {
            Family::Cycle => GeneratorSpec::Cycle {
                n: self.n,
                rotation_offset: self.offset,
                skip: self.skip,
            },
            Family::Petersen => GeneratorSpec::Petersen {
                n: self.n,
                k: self.k,
            },
            Family::Complete => GeneratorSpec::Complete { n: self.n },
            Family::Wheel => GeneratorSpec::Wheel { n: self.n },
            Family::CompleteBipartite => GeneratorSpec::CompleteBipartite {
                n1: self.n,
                n2: self.n2,
                gap: self.gap,
            },
        }
    }
}

fn parse_family(raw: &str) -> Result<Family, String> {
    Family::from_name(raw).ok_or_else(|| {
        let known: Vec<&str> = Family::ALL.iter().map(|family| family.name()).collect();
        format!("unknown family {raw:?}; expected one of {}", known.join(", "))
    })
}

pub fn run(
    library: &GraphLibrary,
    seed: Option<u64>,
    args: &GenerateArgs,
) -> Result<(), Box<dyn Error>> {
    let config = GraphConfig {
        id_seed: seed,
        ..GraphConfig::default()
    };
    let mut graph = Graph::new(args.name.as_str(), config);
    generate(&mut graph, &args.spec(), &Layout::default())?;
    let path = library.save(&args.name, &graph)?;
    println!(
        "{} ({} vertices, {} edges) -> {}",
        args.name,
        graph.len(),
        graph.edge_count(),
        path.display()
    );
    Ok(())
}
