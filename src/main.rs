use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sylva_blocks::BlockRegistry;
use sylva_trees::{Cherry, Oak, SpeciesSet, Spruce, chunk_density};
use sylva_world::climate::ClimateSampler;
use sylva_world::{BlockPos, MemoryWorld, load_params_from_path};

/// Sample forest growth over a flat test world and log per-species stats.
#[derive(Parser, Debug)]
#[command(name = "sylva")]
struct Args {
    /// World seed for spawn fields and climate.
    #[arg(long, default_value_t = 1337)]
    seed: i32,

    /// Growth attempts to run.
    #[arg(long, default_value_t = 4000)]
    attempts: u32,

    /// Block definitions.
    #[arg(long, default_value = "config/blocks.toml")]
    blocks: PathBuf,

    /// Forest and biome parameters.
    #[arg(long, default_value = "config/forest.toml")]
    forest: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let reg = BlockRegistry::load_from_path(&args.blocks)?;
    let params = load_params_from_path(&args.forest)?;

    let mut set = SpeciesSet::new();
    set.register(Box::new(Oak::new()));
    set.register(Box::new(Spruce::new()));
    set.register(Box::new(Cherry));
    set.bind_blocks(&reg)?;
    set.bind_world(args.seed);

    let dirt = reg
        .block_by_name("dirt")
        .ok_or("block config is missing 'dirt'")?;
    let ground_height = 64;
    let mut world = MemoryWorld::flat(dirt, ground_height, 256);

    let climate = params
        .biomes
        .as_ref()
        .map(|b| ClimateSampler::bind(args.seed, b));
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed as u64);

    let mut planted = 0u64;
    for _ in 0..args.attempts {
        let x = rng.random_range(-512..512);
        let z = rng.random_range(-512..512);
        let origin = BlockPos::new(x, ground_height, z);

        for idx in 0..set.len() {
            let density = match (climate.as_ref(), set.noise(idx)) {
                (Some(climate), Some(noise)) => {
                    let Some(sample) = climate.biome_for(x, z) else {
                        continue;
                    };
                    let conditions = set
                        .species(idx)
                        .map(|s| s.biome_conditions())
                        .unwrap_or(&[]);
                    let Some(density) = chunk_density(noise, conditions, &sample, x >> 4, z >> 4)
                    else {
                        continue;
                    };
                    density
                }
                _ => params.tree_probability,
            };
            if rng.random::<f32>() >= density {
                continue;
            }

            let mut placements = Vec::new();
            let grew = set.grow(idx, &world, &reg, origin, &mut rng, &mut |p, b| {
                placements.push((p, b))
            });
            if grew {
                for (p, b) in placements {
                    world.set(p, b);
                }
                planted += 1;
                break;
            }
        }
    }

    for idx in 0..set.len() {
        if let (Some(species), Some(stats)) = (set.species(idx), set.stats(idx)) {
            log::info!(
                "{}: {} attempts, {} grown ({:.2}%)",
                species.name(),
                stats.attempts(),
                stats.successes(),
                stats.percent()
            );
        }
    }
    log::info!("planted {planted} trees in {} attempts", args.attempts);
    Ok(())
}
