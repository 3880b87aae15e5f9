//! Fixed-cadence simulation driver
//!
//! Owns the session state on a dedicated task and ticks it at the configured
//! period while running. Readers never touch the state directly; they get
//! immutable snapshots through a watch channel, and the last snapshot stays
//! readable after the loop stops.

use std::time::Duration;

use log::{debug, info};
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::MissedTickBehavior;

use crate::config::PhysicsConfig;
use crate::consts::TICK_PERIOD;
use crate::sim::{self, FieldGeometry, SimState, Snapshot, TiltSample};

/// Latest-value tilt input
///
/// The loop acquires the source when it enters the running state and releases
/// it again when it stops, including on abnormal exit. `latest` returning
/// `None` means the sensor is gone; the loop degrades to a zero sample and the
/// ball coasts to rest under friction.
pub trait TiltSource: Send + 'static {
    /// Called when the loop enters the running state
    fn start(&mut self) {}
    /// Called when the loop leaves the running state, and on task exit
    fn stop(&mut self) {}
    /// Most recent tilt reading
    fn latest(&mut self) -> Option<TiltSample>;
}

/// Tilt source fed through a watch channel
///
/// The sender side lives with the sensor callback; each tick reads whatever
/// value is most recent when it runs.
pub struct ChannelTiltSource {
    rx: watch::Receiver<TiltSample>,
}

impl ChannelTiltSource {
    /// Connected (sender, source) pair, initially at zero tilt
    pub fn pair() -> (watch::Sender<TiltSample>, Self) {
        let (tx, rx) = watch::channel(TiltSample::ZERO);
        (tx, Self { rx })
    }
}

impl TiltSource for ChannelTiltSource {
    fn latest(&mut self) -> Option<TiltSample> {
        // A dropped sender means the sensor went away
        if self.rx.has_changed().is_err() {
            None
        } else {
            Some(*self.rx.borrow_and_update())
        }
    }
}

/// Loop control states. `Shutdown` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Running,
    Stopped,
    Shutdown,
}

/// Handle to a spawned simulation loop
///
/// Spawns in the stopped state; call [`SimulationLoop::start`] to begin
/// ticking. Dropping the handle shuts the task down.
pub struct SimulationLoop {
    control_tx: watch::Sender<Control>,
    geometry_tx: watch::Sender<FieldGeometry>,
    snapshot_rx: watch::Receiver<Snapshot>,
    task: JoinHandle<SimState>,
}

impl SimulationLoop {
    /// Spawn the driver task at the default 60 Hz cadence
    pub fn spawn<S: TiltSource>(geometry: FieldGeometry, cfg: PhysicsConfig, source: S) -> Self {
        Self::spawn_with_period(geometry, cfg, source, TICK_PERIOD)
    }

    /// Spawn with a custom tick period
    pub fn spawn_with_period<S: TiltSource>(
        geometry: FieldGeometry,
        cfg: PhysicsConfig,
        source: S,
        period: Duration,
    ) -> Self {
        let state = SimState::new(geometry.clone());
        let (control_tx, control_rx) = watch::channel(Control::Stopped);
        let (geometry_tx, geometry_rx) = watch::channel(geometry);
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());
        let task = tokio::spawn(run_loop(
            state,
            cfg,
            period,
            source,
            control_rx,
            geometry_rx,
            snapshot_tx,
        ));
        Self {
            control_tx,
            geometry_tx,
            snapshot_rx,
            task,
        }
    }

    /// Enter the running state; ticking resumes from the existing ball and
    /// score state and re-reads the current field geometry
    pub fn start(&self) {
        self.control_tx.send_if_modified(|c| {
            if *c == Control::Stopped {
                *c = Control::Running;
                true
            } else {
                false
            }
        });
    }

    /// Stop ticking before the next tick begins; an in-flight tick completes
    /// and its snapshot stays readable
    pub fn stop(&self) {
        self.control_tx.send_if_modified(|c| {
            if *c == Control::Running {
                *c = Control::Stopped;
                true
            } else {
                false
            }
        });
    }

    pub fn is_running(&self) -> bool {
        *self.control_tx.borrow() == Control::Running
    }

    /// Replace the field wholesale (e.g. on surface resize); the next tick
    /// sees the new geometry in full, never a partial update
    pub fn set_field_geometry(&self, geometry: FieldGeometry) {
        let _ = self.geometry_tx.send(geometry);
    }

    /// Most recent published snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver for render-side polling or awaiting
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_rx.clone()
    }

    /// Tear the loop down and return the final session state
    pub async fn shutdown(self) -> Result<SimState, JoinError> {
        let _ = self.control_tx.send(Control::Shutdown);
        self.task.await
    }
}

async fn run_loop<S: TiltSource>(
    mut state: SimState,
    cfg: PhysicsConfig,
    period: Duration,
    mut source: S,
    mut control_rx: watch::Receiver<Control>,
    mut geometry_rx: watch::Receiver<FieldGeometry>,
    snapshot_tx: watch::Sender<Snapshot>,
) -> SimState {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut acquired = false;

    loop {
        let control = *control_rx.borrow_and_update();
        match control {
            Control::Shutdown => break,
            Control::Stopped => {
                if acquired {
                    source.stop();
                    acquired = false;
                    debug!("simulation stopped at tick {}", state.time_ticks);
                }
                // Park until the control state changes; a dropped handle
                // counts as shutdown
                if control_rx.changed().await.is_err() {
                    break;
                }
                continue;
            }
            Control::Running => {
                if !acquired {
                    source.start();
                    acquired = true;
                    state.set_geometry(geometry_rx.borrow_and_update().clone());
                    interval.reset();
                    debug!("simulation running at tick {}", state.time_ticks);
                }
            }
        }

        tokio::select! {
            _ = interval.tick() => {
                if geometry_rx.has_changed().unwrap_or(false) {
                    state.set_geometry(geometry_rx.borrow_and_update().clone());
                }
                let tilt = source.latest().unwrap_or(TiltSample::ZERO);
                sim::tick(&mut state, tilt, &cfg);
                let _ = snapshot_tx.send(state.snapshot());
            }
            res = control_rx.changed() => {
                if res.is_err() {
                    break;
                }
                // Re-evaluate control before the next tick fires
            }
        }
    }

    if acquired {
        source.stop();
    }
    info!("simulation loop shut down after {} ticks", state.time_ticks);
    state
}
