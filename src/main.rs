//! Headless molframe demo.
//!
//! Reads a whitespace-separated coordinate file (`x y z` per atom, `#`
//! comments allowed), frames it, and simulates a few seconds of spinning
//! with the pointer moving on and off the structure, logging what the
//! framing core does. Run with `RUST_LOG=debug` for hover transitions.
//!
//! ```text
//! molframe <coords> [--angstroms] [--options preset.toml]
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glam::Vec2;
use molframe::bounds::AtomPositions;
use molframe::engine::FramingEngine;
use molframe::error::MolframeError;
use molframe::options::Options;
use molframe::scene::{NodeKind, StructureRoot};
use molframe::util::units::{scale_angstroms, to_angstroms};

const DT: f32 = 1.0 / 60.0;

struct Args {
    coords: PathBuf,
    angstroms: bool,
    options: Option<PathBuf>,
}

fn parse_args() -> Option<Args> {
    let mut args = std::env::args().skip(1);
    let mut coords = None;
    let mut angstroms = false;
    let mut options = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--angstroms" => angstroms = true,
            "--options" => options = Some(PathBuf::from(args.next()?)),
            _ => coords = Some(PathBuf::from(arg)),
        }
    }
    Some(Args {
        coords: coords?,
        angstroms,
        options,
    })
}

fn read_coords(path: &Path) -> Result<Vec<f32>, MolframeError> {
    let text = std::fs::read_to_string(path)?;
    let mut coords = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default();
        for token in line.split_whitespace() {
            let value = token.parse::<f32>().map_err(|_| {
                MolframeError::CoordinateParse {
                    line: i + 1,
                    token: token.to_owned(),
                }
            })?;
            coords.push(value);
        }
    }
    Ok(coords)
}

/// Tick `frames` times, "drawing" only when the root changed. Returns how
/// many frames needed a redraw.
fn run_frames(
    engine: &mut FramingEngine,
    root: &mut StructureRoot,
    frames: usize,
) -> usize {
    let mut redraws = 0;
    for _ in 0..frames {
        if engine.tick(DT, root) && root.is_dirty() {
            redraws += 1;
            root.mark_rendered();
        }
    }
    redraws
}

fn run(args: &Args) -> Result<(), MolframeError> {
    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let mut coords = read_coords(&args.coords)?;
    if args.angstroms {
        coords = scale_angstroms(&coords);
    }
    let atoms = AtomPositions::from_flat(&coords)?;

    let mut root = StructureRoot::new();
    let _ = root.add_child("atoms", NodeKind::Instanced { count: atoms.len() });

    let mut engine = FramingEngine::new(options, 16.0 / 9.0);
    let Some(centered) = engine.load(&atoms, &mut root) else {
        return Ok(());
    };
    log::info!(
        "bounds: radius {:.1} ({:.2} Å), box {} .. {}, offset {}",
        centered.radius(),
        to_angstroms(centered.radius()),
        centered.min(),
        centered.max(),
        centered.offset()
    );
    log::info!(
        "camera: eye {}, near {:.2}, far {:.1}, zoom range {:.1} .. {:.1}",
        engine.camera().eye,
        engine.camera().znear,
        engine.camera().zfar,
        engine.controls().min_distance,
        engine.controls().max_distance
    );

    let redraws = run_frames(&mut engine, &mut root, 180);
    log::info!(
        "after 3s: {redraws} redraws, angle {:.3} rad, speed {:.3} rad/s, \
         in view: {}",
        engine.rotation().angle,
        engine.rotation().current_speed,
        engine.structure_in_view(&root)
    );

    let hovered = engine.pointer_move(Vec2::ZERO, &root);
    let redraws = run_frames(&mut engine, &mut root, 120);
    log::info!(
        "pointer at center: hovered {hovered}, {redraws} redraws, picked {:?}, \
         speed {:.4} rad/s, glow {:.2}",
        engine.hover().picked.map(|p| p.index),
        engine.rotation().current_speed,
        engine.hover().glow
    );

    engine.pointer_leave();
    let redraws = run_frames(&mut engine, &mut root, 120);
    log::info!(
        "pointer gone: {redraws} redraws, speed {:.3} rad/s, root angle {:.3} rad",
        engine.rotation().current_speed,
        root.rotation_y()
    );

    if let Some(lines) = engine.debug_wireframe(&root) {
        log::info!("debug wireframe: {} line segments", lines.len() / 2);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(args) = parse_args() else {
        log::error!(
            "Usage: molframe <coords> [--angstroms] [--options preset.toml]"
        );
        return ExitCode::FAILURE;
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
