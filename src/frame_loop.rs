use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Cancellation handle for a running frame loop.
///
/// Clones share the same flag, so any holder can stop the loop.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Arc<AtomicBool>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Drives update+render once per host refresh until stopped
pub struct FrameLoop {
    started: Instant,
    handle: Option<LoopHandle>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            handle: None,
        }
    }

    /// Start (or restart) the loop and return a handle that can stop it
    pub fn start(&mut self) -> LoopHandle {
        if let Some(handle) = &self.handle {
            handle.stop();
        }

        let handle = LoopHandle {
            running: Arc::new(AtomicBool::new(true)),
        };
        self.handle = Some(handle.clone());
        handle
    }

    /// Whether another frame should be scheduled
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(LoopHandle::is_running)
    }

    /// Monotonic milliseconds since the loop was created
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames-per-second counter
pub struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    /// Tick the counter, returns Some(fps) every second
    pub fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}
