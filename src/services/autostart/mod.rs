//! Login-item registration.
//!
//! On Windows the running executable is written to the per-user Run key so
//! the widget comes back at logon. Elsewhere this is a logged no-op. The
//! host treats any failure here as a warning; deadline and notes handling
//! must keep working without it.

use anyhow::Result;

/// Name of the registry value (and generally the login item) we own.
pub const APP_NAME: &str = "ExamCountdown";

#[cfg(windows)]
pub fn register() -> Result<()> {
    use std::os::windows::ffi::OsStrExt;

    use anyhow::Context;
    use windows::core::w;
    use windows::Win32::System::Registry::{
        RegCloseKey, RegOpenKeyExW, RegSetValueExW, HKEY, HKEY_CURRENT_USER, KEY_SET_VALUE,
        REG_SZ,
    };

    let exe = std::env::current_exe().context("could not resolve the executable path")?;
    let value: Vec<u16> = exe.as_os_str().encode_wide().chain(Some(0)).collect();

    let mut key = HKEY::default();
    unsafe {
        RegOpenKeyExW(
            HKEY_CURRENT_USER,
            w!("Software\\Microsoft\\Windows\\CurrentVersion\\Run"),
            0,
            KEY_SET_VALUE,
            &mut key,
        )
        .ok()
        .context("could not open the Run key")?;

        let data = std::slice::from_raw_parts(value.as_ptr().cast::<u8>(), value.len() * 2);
        let status = RegSetValueExW(key, w!("ExamCountdown"), 0, REG_SZ, Some(data));
        let _ = RegCloseKey(key);
        status.ok().context("could not write the Run value")?;
    }

    log::info!("registered {} for autostart at {}", APP_NAME, exe.display());
    Ok(())
}

#[cfg(not(windows))]
pub fn register() -> Result<()> {
    log::debug!("autostart registration is only implemented on Windows");
    Ok(())
}
