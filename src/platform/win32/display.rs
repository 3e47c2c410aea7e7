//! Primary display mode via the GDI display settings API.

use std::mem;
use std::ptr;

use windows_sys::Win32::Foundation::FALSE;
use windows_sys::Win32::Graphics::Gdi::{
    ChangeDisplaySettingsW, EnumDisplayDevicesW, EnumDisplaySettingsW, CDS_UPDATEREGISTRY,
    DEVMODEW, DISPLAY_DEVICEW, DISPLAY_DEVICE_ATTACHED_TO_DESKTOP, DISP_CHANGE_SUCCESSFUL,
    DM_PELSHEIGHT, DM_PELSWIDTH, ENUM_CURRENT_SETTINGS,
};

use crate::platform::{DisplayControl, PlatformError};

pub struct Win32Display;

impl DisplayControl for Win32Display {
    fn set_resolution(&self, width: u32, height: u32) -> Result<(), PlatformError> {
        let mut mode: DEVMODEW = unsafe { mem::zeroed() };
        mode.dmSize = mem::size_of::<DEVMODEW>() as u16;

        if unsafe { EnumDisplaySettingsW(ptr::null(), ENUM_CURRENT_SETTINGS, &mut mode) } == FALSE
        {
            return Err(PlatformError::Unavailable(
                "current display settings could not be read".into(),
            ));
        }

        mode.dmPelsWidth = width;
        mode.dmPelsHeight = height;
        mode.dmFields = DM_PELSWIDTH | DM_PELSHEIGHT;

        let result = unsafe { ChangeDisplaySettingsW(&mode, CDS_UPDATEREGISTRY) };
        if result != DISP_CHANGE_SUCCESSFUL {
            return Err(PlatformError::Os {
                call: "ChangeDisplaySettingsW",
                code: i64::from(result),
            });
        }
        log::info!("display: mode set to {width}x{height}");
        Ok(())
    }

    fn reset(&self) -> Result<(), PlatformError> {
        let result = unsafe { ChangeDisplaySettingsW(ptr::null(), 0) };
        if result != DISP_CHANGE_SUCCESSFUL {
            return Err(PlatformError::Os {
                call: "ChangeDisplaySettingsW",
                code: i64::from(result),
            });
        }
        log::info!("display: mode restored from registry");
        Ok(())
    }

    fn attached_count(&self) -> Result<u32, PlatformError> {
        let mut count = 0;
        let mut index = 0;
        loop {
            let mut device: DISPLAY_DEVICEW = unsafe { mem::zeroed() };
            device.cb = mem::size_of::<DISPLAY_DEVICEW>() as u32;
            if unsafe { EnumDisplayDevicesW(ptr::null(), index, &mut device, 0) } == FALSE {
                break;
            }
            if device.StateFlags & DISPLAY_DEVICE_ATTACHED_TO_DESKTOP != 0 {
                count += 1;
            }
            index += 1;
        }
        Ok(count)
    }
}
