//! Miracast receiver toggle.
//!
//! The receiver is controlled by one machine-wide DWORD flag. An absent key
//! or value reads as disabled; enabling creates the key when needed.

use serde::Serialize;

use crate::platform::{PlatformError, ReceiverRegistry};

use super::OpResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiverStatus {
    pub enabled: bool,
    pub message: String,
}

pub fn enable_receiver(registry: &dyn ReceiverRegistry) -> OpResult {
    match registry.write_flag(1) {
        Ok(()) => OpResult::ok("Miracast receiver enabled"),
        Err(PlatformError::PermissionDenied(path)) => {
            log::warn!("receiver: write to {path} denied");
            OpResult::failed(
                format!("access denied to {path}; administrator privileges are required"),
                Some(ERROR_ACCESS_DENIED),
            )
        }
        Err(e) => {
            log::warn!("receiver: enable failed: {e}");
            OpResult::from_error("Miracast receiver could not be enabled", &e)
        }
    }
}

pub fn is_receiver_enabled(registry: &dyn ReceiverRegistry) -> ReceiverStatus {
    match registry.read_flag() {
        Ok(Some(value)) if value != 0 => ReceiverStatus {
            enabled: true,
            message: "Miracast receiver is enabled".into(),
        },
        Ok(_) => ReceiverStatus {
            enabled: false,
            message: "Miracast receiver is disabled".into(),
        },
        Err(e) => ReceiverStatus {
            enabled: false,
            message: format!("Miracast receiver state could not be read: {e}"),
        },
    }
}

/// Win32 `ERROR_ACCESS_DENIED`.
const ERROR_ACCESS_DENIED: i64 = 5;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeRegistry;

    #[test]
    fn missing_key_reads_as_disabled() {
        let status = is_receiver_enabled(&FakeRegistry::default());
        assert!(!status.enabled);
    }

    #[test]
    fn enable_creates_flag_then_reads_enabled() {
        let registry = FakeRegistry::default();
        assert!(enable_receiver(&registry).success);
        assert_eq!(registry.flag(), Some(1));
        assert!(is_receiver_enabled(&registry).enabled);
    }

    #[test]
    fn zero_flag_reads_as_disabled() {
        let registry = FakeRegistry::with_flag(0);
        assert!(!is_receiver_enabled(&registry).enabled);
    }

    #[test]
    fn access_denied_carries_privilege_hint() {
        let registry = FakeRegistry::read_only();
        let result = enable_receiver(&registry);
        assert!(!result.success);
        assert!(result.message.contains("administrator"), "{}", result.message);
        assert_eq!(result.error_code, Some(5));
        assert_eq!(registry.flag(), None);
    }
}
