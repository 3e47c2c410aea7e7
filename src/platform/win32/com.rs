//! Per-call COM apartment initialization.

use windows::Win32::Foundation::RPC_E_CHANGED_MODE;
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT};

use crate::platform::PlatformError;

/// Keeps COM initialized on the current thread until dropped.
///
/// If the thread already runs an apartment of another model, COM is usable
/// as-is and nothing is uninitialized on drop.
pub struct ComApartment {
    owned: bool,
}

impl ComApartment {
    pub fn enter(model: COINIT) -> Result<Self, PlatformError> {
        match unsafe { CoInitializeEx(None, model) } {
            Ok(()) => Ok(ComApartment { owned: true }),
            Err(e) if e.code() == RPC_E_CHANGED_MODE => Ok(ComApartment { owned: false }),
            Err(e) => Err(PlatformError::Unavailable(format!("COM initialization failed: {e}"))),
        }
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        if self.owned {
            unsafe { CoUninitialize() };
        }
    }
}

impl From<windows::core::Error> for PlatformError {
    fn from(e: windows::core::Error) -> Self {
        PlatformError::Os {
            call: "COM",
            code: i64::from(e.code().0),
        }
    }
}
