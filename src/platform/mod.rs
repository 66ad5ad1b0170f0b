use std::path::Path;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(not(any(windows, target_os = "macos")))]
mod unsupported;
#[cfg(windows)]
mod windows;

/// OS-specific capabilities the host applies at startup.
pub trait PlatformOps {
    /// Installs `cert_file` into the system root trust store through the
    /// platform's own tooling. Returns success plus captured stdout;
    /// platforms without an integration return `(false, "")`.
    fn install_root_cert(&self, cert_file: &Path) -> (bool, String);

    /// Opts the process into DPI awareness where the OS requires it.
    fn set_dpi_awareness(&self);

    fn name(&self) -> &'static str;
}

/// The capability set for the OS this binary was built for.
pub fn current() -> &'static dyn PlatformOps {
    #[cfg(windows)]
    return &windows::Windows;
    #[cfg(target_os = "macos")]
    return &macos::MacOs;
    #[cfg(not(any(windows, target_os = "macos")))]
    return &unsupported::Unsupported;
}

// The trust store tools already skip certificates that are installed, so a
// plain run is idempotent.
#[cfg(any(windows, target_os = "macos"))]
fn run_install_command(mut cmd: std::process::Command) -> (bool, String) {
    match cmd.output() {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            (output.status.success(), stdout)
        }
        Err(err) => {
            log::error!("Failed to run trust store tool: {err}");
            (false, String::new())
        }
    }
}
