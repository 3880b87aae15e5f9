//! Pocket Pitch headless demo
//!
//! Runs the simulation loop for a few seconds with a scripted tilt and dumps
//! the final snapshot as JSON. Rendering and real sensor input are the host
//! application's job; this binary stands in for both.

use std::time::Duration;

use pocket_pitch::runner::{ChannelTiltSource, SimulationLoop};
use pocket_pitch::sim::{Edge, FieldGeometry, GoalZone, TiltSample};
use pocket_pitch::PhysicsConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    log::info!("Pocket Pitch demo starting...");

    let geometry = FieldGeometry::new(
        800.0,
        480.0,
        10.0,
        vec![
            GoalZone {
                edge: Edge::Top,
                x_min: 300.0,
                x_max: 500.0,
                owner: 1,
            },
            GoalZone {
                edge: Edge::Bottom,
                x_min: 300.0,
                x_max: 500.0,
                owner: 2,
            },
        ],
    )
    .expect("demo geometry is valid");

    let (tilt_tx, tilt_source) = ChannelTiltSource::pair();
    let sim = SimulationLoop::spawn(geometry, PhysicsConfig::default(), tilt_source);
    sim.start();

    // Tilt toward the top goal, then the bottom one
    let _ = tilt_tx.send(TiltSample::new(0.0, -4.0));
    tokio::time::sleep(Duration::from_secs(2)).await;
    let _ = tilt_tx.send(TiltSample::new(0.0, 4.0));
    tokio::time::sleep(Duration::from_secs(2)).await;

    sim.stop();
    let state = sim.shutdown().await.expect("simulation task panicked");

    let snapshot = state.snapshot();
    log::info!(
        "demo finished: {} ticks, {} goals",
        snapshot.tick,
        snapshot.scores.total()
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).expect("snapshot serializes")
    );
}
