//! Ticker Actor: Dedicated thread for animation timing.
//!
//! Provides the regular "tick" signal that drives the floating hearts and
//! the flower burst. Ticks carry the elapsed time since start, so widgets
//! animate as pure functions of time rather than accumulating per-frame
//! deltas.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Frame number (monotonically increasing).
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

impl Tick {
    /// Elapsed time in seconds, the unit the animation ranges use.
    pub fn seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

/// Ticker actor that generates regular timing events.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a new ticker actor with the given interval.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the ticker thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(interval: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Bounded channel with a tiny buffer: if the main loop falls behind,
        // ticks are dropped rather than queued.
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("keepsake-ticker".to_string())
            .spawn(move || {
                run_loop(&tick_tx, &shutdown_clone, interval);
            })
            .expect("Failed to spawn ticker thread");

        Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        }
    }

    /// Get a reference to the tick receiver, for use with `select!`.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Main ticker loop.
fn run_loop(tick_tx: &Sender<Tick>, shutdown: &Arc<AtomicBool>, interval: Duration) {
    let start = Instant::now();
    let mut frame = 0u64;
    let mut next_tick = start + interval;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        let now = Instant::now();
        if now >= next_tick {
            let tick = Tick {
                frame,
                elapsed: now - start,
            };

            // Non-blocking send: a full buffer means the receiver is slow,
            // so the tick is skipped instead of queued.
            let _ = tick_tx.try_send(tick);

            frame += 1;
            next_tick += interval;

            // Catch up without queuing if we fell behind.
            if next_tick < now {
                next_tick = now + interval;
            }
        } else {
            let sleep_duration = next_tick - now;
            thread::sleep(sleep_duration.min(Duration::from_millis(1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_delivers_monotone_frames() {
        let ticker = TickerActor::spawn(Duration::from_millis(10));

        let first = ticker
            .receiver()
            .recv_timeout(Duration::from_millis(200))
            .expect("no first tick");
        let second = ticker
            .receiver()
            .recv_timeout(Duration::from_millis(200))
            .expect("no second tick");

        assert!(second.frame > first.frame);
        assert!(second.elapsed >= first.elapsed);

        ticker.join();
    }

    #[test]
    fn test_tick_seconds() {
        let tick = Tick {
            frame: 0,
            elapsed: Duration::from_millis(1500),
        };
        assert!((tick.seconds() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ticker_shutdown() {
        let ticker = TickerActor::spawn(Duration::from_millis(100));
        ticker.shutdown();
        thread::sleep(Duration::from_millis(50));
        ticker.join();
    }
}
