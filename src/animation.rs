use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::Rng;

use crate::state::Delta;

/// A periodic background task owned by exactly one view.
///
/// Each elapsed interval calls `tick`; a returned delta is forwarded to the UI
/// thread. The task ends when `tick` returns `None`, when the UI side of the
/// channel is gone, or when the handle is cancelled or dropped. Dropping joins
/// the thread, so no tick can be produced after the owning view is torn down.
pub struct ViewTimer {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ViewTimer {
    pub fn start<F>(interval: Duration, tx: Sender<Delta>, mut tick: F) -> Self
    where
        F: FnMut() -> Option<Delta> + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                }
                let Some(delta) = tick() else {
                    return;
                };
                if tx.send(delta).is_err() {
                    return;
                }
            }
        });
        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(|h| h.is_finished())
    }

    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop_tx.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ViewTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Rotates the home-page score ticker.
pub fn start_ticker(interval: Duration, tx: Sender<Delta>) -> ViewTimer {
    ViewTimer::start(interval, tx, || Some(Delta::TickerAdvance))
}

/// Random drift of up to ±5 points per side, every interval.
pub fn start_cheer_meter(interval: Duration, tx: Sender<Delta>) -> ViewTimer {
    ViewTimer::start(interval, tx, || {
        let mut rng = rand::thread_rng();
        Some(Delta::CheerJitter {
            home: (rng.r#gen::<f32>() - 0.5) * 10.0,
            away: (rng.r#gen::<f32>() - 0.5) * 10.0,
        })
    })
}

/// Counter ramp: `steps` ticks spread over `duration`, then the task ends.
pub fn start_counter_ramp(duration: Duration, steps: u32, tx: Sender<Delta>) -> ViewTimer {
    let steps = steps.max(1);
    let interval = duration / steps;
    let mut step = 0u32;
    ViewTimer::start(interval, tx, move || {
        if step >= steps {
            return None;
        }
        step += 1;
        Some(Delta::CounterStep { step, steps })
    })
}

pub const CHEER_MIN: f32 = 20.0;
pub const CHEER_MAX: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheerMeter {
    pub home: f32,
    pub away: f32,
}

impl Default for CheerMeter {
    fn default() -> Self {
        Self {
            home: 45.0,
            away: 55.0,
        }
    }
}

impl CheerMeter {
    pub fn jitter(self, home: f32, away: f32) -> Self {
        Self {
            home: (self.home + home).clamp(CHEER_MIN, CHEER_MAX),
            away: (self.away + away).clamp(CHEER_MIN, CHEER_MAX),
        }
    }
}

/// Next ticker index; stays at zero when there is nothing to rotate.
pub fn advance_ticker(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + 1) % len }
}
