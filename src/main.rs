use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use fluidsim::config::{self, Config};
use fluidsim::solver::diagnostics;
use fluidsim::FluidSim;

/// Value following `flag` on the command line, if any.
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

fn report(sim: &FluidSim, step: usize) {
    let (vx, vy) = sim.velocity_fields();
    let n = sim.size();
    log::info!(
        "step={} t={:.3} mass={:.4} KE={:.6e} |div|={:.3e}",
        step,
        step as f32 * sim.dt(),
        diagnostics::total_density(sim.density_field()),
        diagnostics::kinetic_energy(vx, vy, sim.obstacles(), n),
        diagnostics::mean_abs_divergence(vx, vy, sim.obstacles(), n),
    );
}

fn run(cfg: &Config) -> Result<(), fluidsim::ParamsError> {
    let mut sim = FluidSim::new(cfg.solver.clone())?;
    cfg.scene.apply_obstacles(&mut sim);

    let started = Instant::now();
    for step in 1..=cfg.run.steps {
        cfg.scene.inject_sources(&mut sim);
        sim.step();
        if cfg.run.report_every > 0 && step % cfg.run.report_every == 0 {
            report(&sim, step);
        }
    }
    let elapsed = started.elapsed();

    let (vx, vy) = sim.velocity_fields();
    println!(
        "{} steps on {n}x{n} in {:.2?} ({:.3} ms/step)",
        cfg.run.steps,
        elapsed,
        elapsed.as_secs_f64() * 1e3 / cfg.run.steps.max(1) as f64,
        n = sim.size(),
    );
    println!(
        "mass={:.4} KE={:.6e} |div|={:.3e} solid={}",
        diagnostics::total_density(sim.density_field()),
        diagnostics::kinetic_energy(vx, vy, sim.obstacles(), sim.size()),
        diagnostics::mean_abs_divergence(vx, vy, sim.obstacles(), sim.size()),
        sim.obstacles().count(),
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let path = arg_value(&args, "--config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATH));
    let mut cfg = config::load(&path);
    if let Some(steps) = arg_value(&args, "--steps") {
        match steps.parse() {
            Ok(v) => cfg.run.steps = v,
            Err(e) => log::warn!("ignoring --steps {steps}: {e}"),
        }
    }

    match run(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("invalid solver parameters: {e}");
            ExitCode::FAILURE
        }
    }
}
