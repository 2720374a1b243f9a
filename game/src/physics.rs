use crate::ship::{Ship, ShipCommand};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, trace, warn};

/// Latest ship state as published by the physics task.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub ship: Ship,
    /// Physics steps taken so far.
    pub tick: u64,
}

/// Handle to the background physics task.
///
/// The task owns the ship. Input reaches it as `ShipCommand`s and the render
/// loop reads the most recent `Snapshot`, so neither side ever waits on the other.
pub struct Physics {
    commands: mpsc::UnboundedSender<ShipCommand>,
    snapshot: watch::Receiver<Snapshot>,
    shutdown: Arc<Notify>,
    task: JoinHandle<Ship>,
}

impl Physics {
    /// `tick_interval` must be non-zero.
    pub fn spawn(rt: &Handle, ship: Ship, tick_interval: Duration) -> Physics {
        let (commands, commands_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot) = watch::channel(Snapshot { ship, tick: 0 });
        let shutdown = Arc::new(Notify::new());

        let task = rt.spawn(physics_task(
            ship,
            commands_rx,
            snapshot_tx,
            shutdown.clone(),
            tick_interval,
        ));

        Physics {
            commands,
            snapshot,
            shutdown,
            task,
        }
    }

    pub fn send(&self, cmd: ShipCommand) {
        if self.commands.send(cmd).is_err() {
            warn!(?cmd, "physics task is gone, dropping command");
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        *self.snapshot.borrow()
    }

    /// Stops the task and waits for it, returning the final ship state.
    pub async fn shutdown(self) -> Result<Ship, String> {
        self.shutdown.notify_one();
        self.task
            .await
            .map_err(|e| format!("physics task failed: {e}"))
    }
}

async fn physics_task(
    mut ship: Ship,
    mut commands: mpsc::UnboundedReceiver<ShipCommand>,
    snapshot_tx: watch::Sender<Snapshot>,
    shutdown: Arc<Notify>,
    tick_interval: Duration,
) -> Ship {
    let mut tick: u64 = 0;

    // First tick fires immediately. A stalled process delays later ticks
    // instead of bursting to catch up.
    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(?tick_interval, "physics started");

    loop {
        tokio::select! {
            biased;
            _ = shutdown.notified() => break,
            cmd = commands.recv() => match cmd {
                Some(cmd) => {
                    trace!(?cmd, "command");
                    ship.apply(cmd);
                }
                // every sender dropped
                None => break,
            },
            _ = interval.tick() => {
                ship.step();
                tick += 1;
                trace!(tick, x = ship.position.x, y = ship.position.y, "step");
            }
        }

        snapshot_tx.send_replace(Snapshot { ship, tick });
    }

    info!(tick, "physics stopped");
    ship
}
