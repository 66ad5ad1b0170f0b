use std::path::Path;
use std::process::Command;

use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwareness, SetProcessDpiAwarenessContext,
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, PROCESS_PER_MONITOR_DPI_AWARE,
};
use windows_version::OsVersion;

use super::{run_install_command, PlatformOps};

pub struct Windows;

impl PlatformOps for Windows {
    fn install_root_cert(&self, cert_file: &Path) -> (bool, String) {
        let mut cmd = Command::new("certutil");
        cmd.args(["-addstore", "Root"]).arg(cert_file);
        run_install_command(cmd)
    }

    fn set_dpi_awareness(&self) {
        // Per-monitor-v2 needs Windows 10 1703; older systems get the
        // Windows 8.1 API.
        let os_version = OsVersion::current();
        let result = if os_version >= OsVersion::new(10, 0, 0, 1703) {
            unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) }
        } else {
            unsafe { SetProcessDpiAwareness(PROCESS_PER_MONITOR_DPI_AWARE) }
        };

        if let Err(err) = result {
            log::warn!("Could not set DPI awareness: {err}");
        }
    }

    fn name(&self) -> &'static str {
        "windows"
    }
}
