//! Basic depot-run example demonstrating runner setup and the mission report.
//!
//! Builds the parameter store, wires a scripted classifier onto the lockstep
//! clock, runs one left-target mission, and prints the traversal and the
//! end-of-run report.
//!
//! Run with: `cargo run -p depot_sim --example depot_run`

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use depot_core::parameters::{MissionParams, ParamValue, ParameterStore};
use depot_core::perception::TargetSighting;
use depot_core::scheduler::{TaskSlot, TickTask};
use depot_sim::{MissionRunner, ScriptedClassifier, SimClock, SimConfig};

struct Heartbeat {
    ticks: Arc<AtomicU32>,
}

impl TickTask for Heartbeat {
    fn name(&self) -> &'static str {
        "heartbeat"
    }

    fn run(&mut self, _now_us: u64) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }
}

fn main() {
    println!("=== depot autonomous run ===\n");

    // 1. Build the parameter store and load mission parameters
    let mut store = ParameterStore::new();
    MissionParams::register_defaults(&mut store).expect("Failed to register parameters");
    store
        .set("SCAN_TIMEOUT", ParamValue::Float(3.0))
        .expect("Failed to set scan timeout");
    let params = MissionParams::from_store(&store);

    // 2. Lockstep clock at 50 Hz
    let config = SimConfig {
        seed: Some(42),
        ..Default::default()
    };
    let clock = SimClock::new(config.tick_period_us);

    // 3. Classifier that spots the left mineral on its fifth pass
    let classifier = ScriptedClassifier::resolves(clock.clone(), TargetSighting::Left, 4);

    // 4. Assemble the runner
    let mut runner =
        MissionRunner::new(config, params, clock, classifier).expect("Failed to build runner");

    // 5. Register a heartbeat task in the pre-mission slot
    let ticks = Arc::new(AtomicU32::new(0));
    runner.add_task(
        TaskSlot::PreMission,
        Box::new(Heartbeat {
            ticks: ticks.clone(),
        }),
    );

    // 6. Run the mission
    let report = runner.run().expect("Mission did not finish");

    println!("Traversal:");
    for (i, phase) in report.traversal.iter().enumerate() {
        println!("  {:>2}. {phase}", i + 1);
    }
    println!();

    let (x, y) = runner.rig().position_in();
    println!(
        "Final state: {} after {} ticks ({:.2} s simulated)",
        report.final_state,
        report.ticks,
        report.sim_time_us as f64 / 1_000_000.0
    );
    println!(
        "Pose: x={x:.1} in, y={y:.1} in, heading={:.1} deg, odometer={:.1} in",
        runner.rig().heading_deg(),
        runner.rig().odometer_in()
    );
    if let Some(scan) = runner.sequencer().scan_stats() {
        println!(
            "Scan: {} samples in {} ms (timed out: {})",
            scan.samples, scan.elapsed_ms, scan.timed_out
        );
    }
    println!(
        "Stale fires: {}, heartbeat ticks: {}",
        report.stale_fires,
        ticks.load(Ordering::Relaxed)
    );

    // 7. Dump the visible parameter listing
    println!("\nParameters:");
    for name in store.iter_names() {
        if let Some(value) = store.get(name.as_str()) {
            println!("  {name:<14} = {value:?}");
        }
    }
}
