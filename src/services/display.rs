//! Display mode service.
//!
//! Changes the resolution of the primary display in place. Creating a new
//! virtual display would need a kernel-mode driver and is not attempted.

use crate::platform::DisplayControl;

use super::OpResult;

/// Sets the primary display to `width` x `height`, persisting the mode.
///
/// Non-positive or out-of-range dimensions fail without any OS call.
pub fn set_display_resolution(display: &dyn DisplayControl, width: i64, height: i64) -> OpResult {
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return OpResult::failed(format!("invalid resolution {width}x{height}"), None);
    };
    if w == 0 || h == 0 {
        return OpResult::failed(format!("invalid resolution {width}x{height}"), None);
    }

    match display.set_resolution(w, h) {
        Ok(()) => OpResult::ok(format!("display resolution set to {w}x{h}")),
        Err(e) => {
            log::warn!("display: set {w}x{h} failed: {e}");
            OpResult::from_error("display settings could not be changed", &e)
        }
    }
}

/// Restores the display mode stored in the registry.
pub fn reset_display(display: &dyn DisplayControl) -> OpResult {
    match display.reset() {
        Ok(()) => OpResult::ok("display settings restored to defaults"),
        Err(e) => {
            log::warn!("display: reset failed: {e}");
            OpResult::from_error("display settings could not be restored", &e)
        }
    }
}

/// Number of displays attached to the desktop; 0 when it cannot be read.
pub fn count_attached_displays(display: &dyn DisplayControl) -> u32 {
    display.attached_count().unwrap_or_else(|e| {
        log::warn!("display: attached display count unavailable: {e}");
        0
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeDisplay;

    #[test]
    fn valid_resolution_is_applied() {
        let display = FakeDisplay::default();
        let result = set_display_resolution(&display, 1920, 1080);
        assert!(result.success, "{result:?}");
        assert_eq!(display.modes(), vec![(1920, 1080)]);
    }

    #[test]
    fn non_positive_dimensions_fail_without_os_call() {
        let display = FakeDisplay::default();
        for (w, h) in [(0, 1080), (1920, -1), (-5, -5), (i64::MAX, 10)] {
            let result = set_display_resolution(&display, w, h);
            assert!(!result.success, "{w}x{h}");
            assert_eq!(result.error_code, None);
        }
        assert!(display.modes().is_empty());
    }

    #[test]
    fn rejected_change_reports_os_code() {
        let display = FakeDisplay::rejecting(-2);
        let result = set_display_resolution(&display, 800, 600);
        assert!(!result.success);
        assert_eq!(result.error_code, Some(-2));
    }

    #[test]
    fn reset_reports_success() {
        let display = FakeDisplay::default();
        assert!(reset_display(&display).success);
        assert_eq!(display.resets(), 1);
    }

    #[test]
    fn count_falls_back_to_zero() {
        assert_eq!(count_attached_displays(&FakeDisplay::default()), 2);
        assert_eq!(count_attached_displays(&FakeDisplay::rejecting(-1)), 0);
    }
}
