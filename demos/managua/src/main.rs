//! managua — headless run of the Managua demo transit map.
//!
//! Spawns the bus fleet on the two urban routes, drives it on the virtual
//! frame / reassignment schedule, writes CSV snapshots, and prints what the
//! browser's detail panel would show for the selected bus.
//!
//! Usage: `managua [config.json]`.  Without a path every setting takes its
//! default.  Set `RUST_LOG=debug` to see reassignment passes.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use serde::Deserialize;

use tm_core::{GeoPoint, SimConfig, StrategyKind, Tick, VehicleId};
use tm_motion::{MotionStrategy, SegmentConfig, SegmentTraversal, TargetConfig, TargetSeeking};
use tm_output::{CsvWriter, SimOutputObserver, SnapshotWriter};
use tm_poi::{FileStore, PoiCategory, PoiRecord, UserPoiStore};
use tm_routes::{RouteSet, demo, load_routes_csv};
use tm_sim::{SimBuilder, SimObserver, SimulationState};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Everything the demo reads from its optional JSON file.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:          SimConfig,
    segment:      SegmentConfig,
    target:       TargetConfig,
    /// Virtual run length.
    duration_ms:  f64,
    output_dir:   PathBuf,
    /// Route table to load instead of the built-in Managua network.
    routes_csv:   Option<PathBuf>,
    /// Routes that receive buses.  Defaults to the urban routes for the
    /// built-in network and to every route for a CSV table.
    fleet_routes: Option<Vec<String>>,
    /// Vehicle shown in the detail panel.
    select:       u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:          SimConfig::default(),
            segment:      SegmentConfig::default(),
            target:       TargetConfig::default(),
            duration_ms:  60_000.0,
            output_dir:   PathBuf::from("output/managua"),
            routes_csv:   None,
            fleet_routes: None,
            select:       0,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: DemoConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: SnapshotWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    skipped:       usize,
    reassigns:     u64,
}

impl<W: SnapshotWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, skipped: 0, reassigns: 0 }
    }
}

impl<W: SnapshotWriter> SimObserver for CountingObserver<W> {
    fn on_frame_end(&mut self, frame: Tick, advanced: usize, skipped: usize) {
        self.summary_rows += 1;
        self.skipped += skipped;
        self.inner.on_frame_end(frame, advanced, skipped);
    }

    fn on_reassign(&mut self, pass: u64, reassigned: usize) {
        self.reassigns = pass;
        self.inner.on_reassign(pass, reassigned);
    }

    fn on_snapshot(&mut self, frame: Tick, state: &SimulationState) {
        self.snapshot_rows += state.vehicle_count();
        self.inner.on_snapshot(frame, state);
    }

    fn on_sim_end(&mut self, final_frame: Tick) {
        self.inner.on_sim_end(final_frame);
    }
}

// ── Run ───────────────────────────────────────────────────────────────────────

fn run<S: MotionStrategy>(config: &DemoConfig, routes: RouteSet, fleet: Vec<String>, strategy: S) -> Result<()> {
    let mut sim = SimBuilder::new(config.sim.clone(), routes, strategy)
        .fleet_routes(fleet)
        .build()?;
    info!("{} buses on {} routes", sim.state.vehicle_count(), sim.state.routes.len());

    let writer = CsvWriter::new(&config.output_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &config.sim));

    let t0 = Instant::now();
    sim.run_for(config.duration_ms, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  frames              : {}", sim.current_frame());
    println!("  reassign passes     : {}", obs.reassigns);
    println!("  skipped steps       : {}", obs.skipped);
    println!("  vehicle_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  frame_summaries.csv   : {} rows", obs.summary_rows);
    println!();

    // Fleet table.
    println!("{:<14} {:<10} {:>10} {:>11} {:>7}  {:<18} {:>8}", "Bus", "Route", "Lat", "Lon", "km/h", "Next stop", "ETA");
    println!("{}", "-".repeat(86));
    for snap in sim.state.snapshots() {
        let detail = sim.detail(snap.id);
        let (stop, eta) = detail
            .map(|d| (d.next_stop.unwrap_or_else(|| "—".into()), d.eta_label))
            .unwrap_or_default();
        println!(
            "{:<14} {:<10} {:>10.5} {:>11.5} {:>7.0}  {:<18} {:>8}",
            snap.id.to_string(),
            snap.route,
            snap.position.lat,
            snap.position.lon,
            snap.speed_kmh,
            stop,
            eta,
        );
    }
    println!();

    // Detail panel for the selected bus.
    let selected = VehicleId(config.select);
    if sim.state.select(selected) {
        sim.state.set_follow(true);
        if let Some(detail) = sim.selected_detail() {
            println!("{detail}");
        }
        if let Some(center) = sim.state.follow_target() {
            println!("  view:      following at {center}");
        }
    } else {
        warn!("no bus {selected} to select; fleet has {} buses", sim.state.vehicle_count());
    }
    Ok(())
}

// ── User points of interest ───────────────────────────────────────────────────

fn poi_demo(output_dir: &Path) -> Result<()> {
    println!();
    println!("Map layers:");
    for cat in PoiCategory::ALL {
        let names: Vec<String> = tm_poi::demo::in_category(cat).map(|p| p.name).collect();
        println!("  {} {:<16} {}", cat.icon(), cat.key(), names.join("; "));
    }

    let store = FileStore::open(output_dir.join("storage"))?;
    let mut pois = UserPoiStore::load(store)?;
    if pois.is_empty() {
        pois.add(PoiRecord::new(
            "Parada frente al parque",
            PoiCategory::BusTerminals.key(),
            GeoPoint::new(12.1252, -86.2361),
        ))?;
        pois.add(PoiRecord::new(
            "Farmacia de turno",
            PoiCategory::Pharmacies24.key(),
            demo::MAP_CENTER.offset(0.002, -0.001),
        ))?;
    }
    println!();
    println!("User points of interest ({}):", pois.len());
    for p in pois.records() {
        println!("  {} {p}", p.icon());
    }
    let path = pois.export_to(output_dir)?;
    println!("  exported to {}", path.display());
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    config.sim.validate()?;

    println!("=== managua — transit map motion simulator ===");
    println!(
        "Buses: {}  |  Strategy: {}  |  Seed: {}  |  Run: {:.1} s",
        config.sim.vehicle_count,
        config.sim.strategy,
        config.sim.seed,
        config.duration_ms / 1_000.0,
    );
    println!();

    let (routes, default_fleet) = match &config.routes_csv {
        Some(path) => {
            let routes = load_routes_csv(path)
                .with_context(|| format!("loading routes from {}", path.display()))?;
            let names = routes.iter().map(|(_, r)| r.name().to_owned()).collect();
            (routes, names)
        }
        None => (demo::managua()?, demo::URBAN_ROUTES.map(str::to_owned).to_vec()),
    };
    let fleet = config.fleet_routes.clone().unwrap_or(default_fleet);

    fs::create_dir_all(&config.output_dir)?;
    match config.sim.strategy {
        StrategyKind::Segment => {
            run(&config, routes, fleet, SegmentTraversal::new(config.segment.clone()))?
        }
        StrategyKind::Target => {
            run(&config, routes, fleet, TargetSeeking::new(config.target.clone()))?
        }
    }

    poi_demo(&config.output_dir)
}
