//! Default render endpoint volume through Core Audio.
//!
//! Every call enters a COM apartment, resolves the default console render
//! device, activates `IAudioEndpointVolume`, and lets the interfaces and the
//! apartment drop before returning.

use windows::Win32::Foundation::BOOL;
use windows::Win32::Media::Audio::Endpoints::IAudioEndpointVolume;
use windows::Win32::Media::Audio::{eConsole, eRender, IMMDeviceEnumerator, MMDeviceEnumerator};
use windows::Win32::System::Com::{CoCreateInstance, CLSCTX_ALL, COINIT_APARTMENTTHREADED};

use super::com::ComApartment;
use crate::platform::{AudioEndpoint, PlatformError};

pub struct DefaultRenderEndpoint;

/// Runs `f` against the default render endpoint's volume interface.
fn with_endpoint<T>(
    f: impl FnOnce(&IAudioEndpointVolume) -> windows::core::Result<T>,
) -> Result<T, PlatformError> {
    let _apartment = ComApartment::enter(COINIT_APARTMENTTHREADED)?;
    // Interfaces are released before `_apartment` uninitializes COM.
    let result = unsafe {
        let enumerator: IMMDeviceEnumerator =
            CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL)?;
        let device = enumerator.GetDefaultAudioEndpoint(eRender, eConsole)?;
        let volume: IAudioEndpointVolume = device.Activate(CLSCTX_ALL, None)?;
        f(&volume)?
    };
    Ok(result)
}

impl AudioEndpoint for DefaultRenderEndpoint {
    fn volume_scalar(&self) -> Result<f32, PlatformError> {
        with_endpoint(|v| unsafe { v.GetMasterVolumeLevelScalar() })
    }

    fn set_volume_scalar(&self, level: f32) -> Result<(), PlatformError> {
        with_endpoint(|v| unsafe { v.SetMasterVolumeLevelScalar(level, std::ptr::null()) })
    }

    fn muted(&self) -> Result<bool, PlatformError> {
        with_endpoint(|v| unsafe { v.GetMute() }).map(|b| b.as_bool())
    }

    fn set_muted(&self, muted: bool) -> Result<(), PlatformError> {
        with_endpoint(|v| unsafe { v.SetMute(BOOL::from(muted), std::ptr::null()) })
    }
}
