//! voxelforge - block placement and collision geometry tooling
//!
//! Small CLI over the placement subsystem: dump the registered stair
//! variants, or resolve a single placement action and print the resulting
//! state, collision shape, and encoding.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use glam::Vec3;
use tracing::info;
use voxelforge_physics::Aabb;
use voxelforge_world::{Face, Facing, PlacementContext, StairRegistry, WoodKind, WoodStairs};

#[derive(Parser)]
#[command(name = "voxelforge", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every registered stair variant with its encoding as JSON
    Variants,
    /// Resolve one placement action and print the result
    Place {
        /// Wood species, e.g. oak or dark_oak
        #[arg(long, default_value = "oak")]
        wood: String,
        /// Clicked face: down, up, north, south, west or east
        #[arg(long)]
        face: String,
        /// Fractional click position within the face, e.g. 0.5,0.6,0.5
        #[arg(long, default_value = "0.5,0.5,0.5")]
        click: String,
        /// Placer's horizontal facing: north, south, west or east
        #[arg(long)]
        facing: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting voxelforge v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let registry = StairRegistry::bootstrap();

    match cli.command {
        Command::Variants => {
            let rows: Vec<serde_json::Value> = registry
                .states()
                .iter()
                .map(|state| {
                    serde_json::json!({
                        "name": state.block_name(),
                        "state": state,
                        "encoded": state.encode(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::Place {
            wood,
            face,
            click,
            facing,
        } => {
            let ctx = PlacementContext {
                face: parse_face(&face)?,
                click_pos: parse_click(&click)?,
                placer_facing: parse_facing(&facing)?,
            };
            let state = WoodStairs::place(parse_wood(&wood)?, &ctx);
            let volumes = state.collision_volumes();
            let report = serde_json::json!({
                "name": state.block_name(),
                "state": state,
                "encoded": state.encode(),
                "item": state.encode_item(),
                "volumes": volumes.iter().map(aabb_json).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn aabb_json(aabb: &Aabb) -> serde_json::Value {
    serde_json::json!({
        "min": [aabb.min.x, aabb.min.y, aabb.min.z],
        "max": [aabb.max.x, aabb.max.y, aabb.max.z],
    })
}

fn parse_wood(s: &str) -> Result<WoodKind> {
    Ok(match s {
        "oak" => WoodKind::Oak,
        "spruce" => WoodKind::Spruce,
        "birch" => WoodKind::Birch,
        "jungle" => WoodKind::Jungle,
        "acacia" => WoodKind::Acacia,
        "dark_oak" => WoodKind::DarkOak,
        other => bail!("unknown wood species: {other}"),
    })
}

fn parse_face(s: &str) -> Result<Face> {
    Ok(match s {
        "down" => Face::Down,
        "up" => Face::Up,
        "north" => Face::North,
        "south" => Face::South,
        "west" => Face::West,
        "east" => Face::East,
        other => bail!("unknown face: {other}"),
    })
}

fn parse_facing(s: &str) -> Result<Facing> {
    match parse_face(s)? {
        face if face.is_horizontal() => Ok(Facing::try_from(face)?),
        vertical => bail!("facing must be horizontal, got {vertical:?}"),
    }
}

fn parse_click(s: &str) -> Result<Vec3> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().context("click components must be numbers"))
        .collect::<Result<_>>()?;
    if parts.len() != 3 {
        bail!("click position needs exactly 3 components, got {}", parts.len());
    }
    Ok(Vec3::new(parts[0], parts[1], parts[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_click_positions() {
        assert_eq!(parse_click("0.5,0.6,0.5").unwrap(), Vec3::new(0.5, 0.6, 0.5));
        assert_eq!(parse_click("0, 1, 0").unwrap(), Vec3::new(0.0, 1.0, 0.0));
        assert!(parse_click("0.5,0.5").is_err());
        assert!(parse_click("a,b,c").is_err());
    }

    #[test]
    fn rejects_vertical_facings() {
        assert!(parse_facing("up").is_err());
        assert!(parse_facing("down").is_err());
        assert_eq!(parse_facing("north").unwrap(), Facing::North);
    }

    #[test]
    fn parses_every_wood_species() {
        for wood in WoodKind::ALL {
            assert_eq!(parse_wood(wood.stairs_name().trim_end_matches("_stairs")).unwrap(), wood);
        }
        assert!(parse_wood("cherry").is_err());
    }
}
