#![forbid(unsafe_code)]
//! # spin-state: drive progress animations from the command line.
//!
//! Prints one line per frame for a plain progress bar or one of the loading
//! presets, samples easing curves, and writes spec files for the library's
//! `load_spec`.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use spin_state::presets::{
    CirclingDot, Countdown, DOUBLE_CIRCLE_CYCLE_MS, DoubleCircle, MATERIAL_CYCLE_MS, MaterialArc,
    Preset,
};
use spin_state::{
    Easing, FrameClock, ManualClock, Mode, MonotonicClock, ProgressController, ProgressSpec,
    load_spec, save_spec,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "spin-state",
    version,
    about = "Drive frame-based progress animations and inspect easing curves"
)]
struct Cli {
    /// Log more (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an animation and print one line per frame
    Run(RunArgs),
    /// Print samples of an easing curve
    Curve(CurveArgs),
    /// Manage spec files
    #[command(subcommand)]
    Spec(SpecCmd),
}

#[derive(Args, Debug, Clone, Default)]
struct SpecArgs {
    /// Cycle length in milliseconds
    #[arg(long = "cycle-ms")]
    cycle_ms: Option<f64>,

    /// Easing curve (linear, fast-out-slow-in, accelerate:2, cubic-bezier(x1,y1,x2,y2), ...)
    #[arg(short = 'e', long, value_parser = parse_easing)]
    easing: Option<Easing>,

    #[arg(short = 'm', long, value_enum)]
    mode: Option<ModeArg>,

    /// Saturate the loop counter at this value
    #[arg(long = "loop-cap")]
    loop_cap: Option<u64>,
}

impl SpecArgs {
    /// Apply command-line overrides on top of `base`.
    fn apply(&self, mut base: ProgressSpec) -> Result<ProgressSpec> {
        if let Some(ms) = self.cycle_ms {
            base.cycle_ms = ms;
        }
        if let Some(easing) = self.easing {
            base.easing = easing;
        }
        if let Some(mode) = self.mode {
            base.mode = mode.into();
        }
        if self.loop_cap.is_some() {
            base.loop_cap = self.loop_cap;
        }
        base.validate()?;
        Ok(base)
    }
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Start from a spec file; flags below override its fields
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    #[command(flatten)]
    spec: SpecArgs,

    #[arg(short = 'p', long, value_enum, default_value_t = PresetChoice::Bar)]
    preset: PresetChoice,

    /// Countdown length for the countdown preset
    #[arg(long, default_value_t = 60)]
    seconds: u32,

    /// Circle radius for the circling preset
    #[arg(long, default_value_t = 24.0)]
    radius: f64,

    /// Frames per second of the simulated clock
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Stop after this many frames (default: two cycles for looping animations)
    #[arg(short = 'n', long)]
    frames: Option<u64>,

    /// Sleep between frames and tick with wall-clock deltas
    #[arg(long)]
    realtime: bool,
}

#[derive(Args, Debug)]
struct CurveArgs {
    #[arg(short = 'e', long, value_parser = parse_easing, default_value = "linear")]
    easing: Easing,

    /// Number of intervals between t=0 and t=1
    #[arg(short = 's', long, default_value_t = 10)]
    samples: u32,
}

#[derive(Subcommand, Debug)]
enum SpecCmd {
    /// Write a spec file
    Init(SpecInitArgs),
    /// Validate and print a spec file
    Show(SpecShowArgs),
}

#[derive(Args, Debug)]
struct SpecInitArgs {
    #[arg(short = 'o', long = "out")]
    out: PathBuf,

    #[command(flatten)]
    spec: SpecArgs,

    /// Overwrite the output if it exists
    #[arg(short = 'f', long = "force")]
    force: bool,
}

#[derive(Args, Debug)]
struct SpecShowArgs {
    file: PathBuf,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeArg {
    Indeterminate,
    Determinate,
}

impl From<ModeArg> for Mode {
    fn from(v: ModeArg) -> Self {
        match v {
            ModeArg::Indeterminate => Mode::Indeterminate,
            ModeArg::Determinate => Mode::Determinate,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PresetChoice {
    /// Plain progress value
    Bar,
    Material,
    Circling,
    DoubleCircle,
    Countdown,
}

fn parse_easing(s: &str) -> Result<Easing, String> {
    s.parse::<Easing>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Run(a) => cmd_run(a),
        Command::Curve(a) => cmd_curve(a),
        Command::Spec(s) => cmd_spec(s),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Progress value plus a text bar, for the `bar` preset.
struct Bar {
    ctl: ProgressController,
}

struct BarFrame {
    phase: spin_state::Phase,
    loop_index: u64,
    progress: f64,
}

impl std::fmt::Display for BarFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const WIDTH: usize = 20;
        let filled = ((self.progress * WIDTH as f64).round() as usize).min(WIDTH);
        write!(
            f,
            "phase={} loop={} progress={:.4} [{}{}]",
            self.phase,
            self.loop_index,
            self.progress,
            "#".repeat(filled),
            ".".repeat(WIDTH - filled)
        )
    }
}

impl Preset for Bar {
    type Frame = BarFrame;

    fn controller(&self) -> &ProgressController {
        &self.ctl
    }

    fn controller_mut(&mut self) -> &mut ProgressController {
        &mut self.ctl
    }

    fn frame(&self) -> BarFrame {
        BarFrame {
            phase: self.ctl.phase(),
            loop_index: self.ctl.loop_index(),
            progress: self.ctl.current_progress(),
        }
    }
}

fn cmd_run(a: RunArgs) -> Result<()> {
    let base = match &a.config {
        Some(path) => load_spec(path)
            .with_context(|| format!("failed to load spec from {}", path.display()))?,
        None => ProgressSpec::default(),
    };
    let spec = a.spec.apply(base).context("invalid animation spec")?;
    debug!(?spec, preset = ?a.preset, "resolved run settings");

    match a.preset {
        PresetChoice::Bar => drive(
            Bar {
                ctl: ProgressController::new(spec)?,
            },
            &a,
        ),
        PresetChoice::Material => drive(
            MaterialArc::with_cycle(cycle_or(&a, &spec, MATERIAL_CYCLE_MS))?,
            &a,
        ),
        PresetChoice::Circling => drive(CirclingDot::new(spec.cycle_ms, a.radius)?, &a),
        PresetChoice::DoubleCircle => drive(
            DoubleCircle::with_cycle(cycle_or(&a, &spec, DOUBLE_CIRCLE_CYCLE_MS))?,
            &a,
        ),
        PresetChoice::Countdown => {
            if a.config.is_some() || a.spec.cycle_ms.is_some() {
                bail!("countdown length comes from --seconds, not --config or --cycle-ms");
            }
            drive(Countdown::new(a.seconds)?, &a)
        }
    }
}

/// Presets keep their own cycle length unless one came from `--config` or
/// `--cycle-ms`.
fn cycle_or(a: &RunArgs, spec: &ProgressSpec, default_ms: f64) -> f64 {
    if a.config.is_some() || a.spec.cycle_ms.is_some() {
        spec.cycle_ms
    } else {
        default_ms
    }
}

fn drive<P: Preset>(mut preset: P, a: &RunArgs) -> Result<()> {
    let fps = a.fps.max(1);
    let step = Duration::from_secs_f64(1.0 / f64::from(fps));
    let mut clock: Box<dyn FrameClock> = if a.realtime {
        Box::new(MonotonicClock::new())
    } else {
        Box::new(ManualClock::from_fps(fps))
    };

    let cycle_ms = preset.controller().spec().cycle_ms;
    let limit = a.frames.unwrap_or_else(|| match preset.controller().spec().mode {
        Mode::Determinate => u64::MAX,
        // two full cycles, rounded up to a whole frame
        Mode::Indeterminate => ((2.0 * cycle_ms * f64::from(fps)) / 1000.0).ceil() as u64,
    });

    preset.controller_mut().start();
    println!("frame=0 {}", preset.frame());

    let mut frames = 0u64;
    let mut repaints = 0u64;
    while frames < limit && preset.controller().is_running() {
        if a.realtime {
            thread::sleep(step);
        }
        let outcome = preset.controller_mut().tick(clock.delta_ms())?;
        frames += 1;
        if outcome.dirty {
            repaints += 1;
        }
        println!("frame={frames} {}", preset.frame());
    }

    let ctl = preset.controller_mut();
    let loops = ctl.loop_index();
    if ctl.is_running() {
        ctl.stop();
    }
    info!(frames, repaints, loops, "run finished");
    eprintln!("{frames} frames, {loops} loops");
    Ok(())
}

fn cmd_curve(a: CurveArgs) -> Result<()> {
    let n = a.samples.max(1);
    for i in 0..=n {
        let t = f64::from(i) / f64::from(n);
        println!("{t:.3} {:.4}", a.easing.apply(t));
    }
    Ok(())
}

fn cmd_spec(s: SpecCmd) -> Result<()> {
    match s {
        SpecCmd::Init(args) => {
            let spec = args.spec.apply(ProgressSpec::default())?;
            save_spec(&args.out, &spec, args.force)
                .with_context(|| format!("failed to write {}", args.out.display()))?;
            eprintln!("Wrote {}", args.out.display());
            Ok(())
        }
        SpecCmd::Show(args) => {
            let spec = load_spec(&args.file)
                .with_context(|| format!("failed to load spec from {}", args.file.display()))?;
            println!("cycle_ms={}", spec.cycle_ms);
            println!("easing={}", spec.easing);
            println!(
                "mode={}",
                match spec.mode {
                    Mode::Indeterminate => "indeterminate",
                    Mode::Determinate => "determinate",
                }
            );
            if let Some(cap) = spec.loop_cap {
                println!("loop_cap={cap}");
            }
            Ok(())
        }
    }
}
