//! Time-indexed transform lookup.
//!
//! The actual transform source (interpolating buffer, replay log, fake for
//! tests) lives behind [`TransformProvider`]; [`TfBridge`] binds it to the
//! configured tracking frame and lookup timeout.

use crate::core::types::Rigid3;
use std::sync::Arc;
use std::time::Duration;

/// Time-indexed source of rigid transforms between named frames.
///
/// `lookup_transform` may block up to `timeout` waiting for data around the
/// requested time, and returns `None` when the transform is unavailable.
/// There is no retry; the caller drops the affected measurement.
pub trait TransformProvider: Send + Sync {
    /// Transform taking points in `source_frame` to `target_frame`, valid
    /// as of `time_us`.
    fn lookup_transform(
        &self,
        target_frame: &str,
        source_frame: &str,
        time_us: u64,
        timeout: Duration,
    ) -> Option<Rigid3>;
}

/// Transform lookups bound to one tracking frame and timeout.
pub struct TfBridge {
    tracking_frame: String,
    lookup_timeout: Duration,
    provider: Arc<dyn TransformProvider>,
}

impl TfBridge {
    /// Create a bridge for the given tracking frame.
    pub fn new(
        tracking_frame: String,
        lookup_timeout: Duration,
        provider: Arc<dyn TransformProvider>,
    ) -> Self {
        Self {
            tracking_frame,
            lookup_timeout,
            provider,
        }
    }

    /// Look up the sensor-frame → tracking-frame transform at `time_us`.
    pub fn lookup_to_tracking(&self, time_us: u64, frame_id: &str) -> Option<Rigid3> {
        self.provider
            .lookup_transform(&self.tracking_frame, frame_id, time_us, self.lookup_timeout)
    }

    /// Name of the tracking frame.
    pub fn tracking_frame(&self) -> &str {
        &self.tracking_frame
    }
}

impl std::fmt::Debug for TfBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfBridge")
            .field("tracking_frame", &self.tracking_frame)
            .field("lookup_timeout", &self.lookup_timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Rigid3);

    impl TransformProvider for Fixed {
        fn lookup_transform(
            &self,
            target_frame: &str,
            _source_frame: &str,
            _time_us: u64,
            _timeout: Duration,
        ) -> Option<Rigid3> {
            (target_frame == "base_link").then_some(self.0)
        }
    }

    #[test]
    fn test_lookup_passes_tracking_frame() {
        let bridge = TfBridge::new(
            "base_link".to_string(),
            Duration::from_millis(10),
            Arc::new(Fixed(Rigid3::identity())),
        );
        assert!(bridge.lookup_to_tracking(0, "laser").is_some());

        let other = TfBridge::new(
            "map".to_string(),
            Duration::from_millis(10),
            Arc::new(Fixed(Rigid3::identity())),
        );
        assert!(other.lookup_to_tracking(0, "laser").is_none());
    }
}
