use std::path::Path;
use std::process::Command;

use super::{run_install_command, PlatformOps};

pub struct MacOs;

impl PlatformOps for MacOs {
    fn install_root_cert(&self, cert_file: &Path) -> (bool, String) {
        let mut cmd = Command::new("sudo");
        cmd.args([
            "security",
            "add-trusted-cert",
            "-d",
            "-r",
            "trustRoot",
            "-k",
            "/Library/Keychains/System.keychain",
        ])
        .arg(cert_file);
        run_install_command(cmd)
    }

    fn set_dpi_awareness(&self) {
        // macOS scales per window, nothing to opt into.
    }

    fn name(&self) -> &'static str {
        "macos"
    }
}
