/// Enforces a minimum duration per frame.
///
/// Time is passed in as milliseconds from any monotonic origin so the policy
/// stays testable without sleeping.
#[derive(Debug, Clone)]
pub struct FramePacer {
    min_frame_ms: u64,
    frame_start_ms: Option<u64>,
}

impl FramePacer {
    pub fn new(min_frame_ms: u64) -> Self {
        Self {
            min_frame_ms,
            frame_start_ms: None,
        }
    }

    pub fn min_frame_ms(&self) -> u64 {
        self.min_frame_ms
    }

    /// Mark the start of a frame.
    pub fn begin(&mut self, now_ms: u64) {
        self.frame_start_ms = Some(now_ms);
    }

    /// How long to wait at `now_ms` so the current frame lasts at least
    /// `min_frame_ms`.
    ///
    /// Without a prior `begin`, the frame is taken to start at `now_ms`.
    pub fn delay_ms(&self, now_ms: u64) -> u64 {
        let start = self.frame_start_ms.unwrap_or(now_ms);
        let spent = now_ms.saturating_sub(start);
        self.min_frame_ms.saturating_sub(spent)
    }
}
