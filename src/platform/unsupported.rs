use std::path::Path;

use super::PlatformOps;

pub struct Unsupported;

impl PlatformOps for Unsupported {
    fn install_root_cert(&self, cert_file: &Path) -> (bool, String) {
        log::warn!(
            "No trust store integration on this platform, install {} manually",
            cert_file.display()
        );
        (false, String::new())
    }

    fn set_dpi_awareness(&self) {}

    fn name(&self) -> &'static str {
        "unsupported"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_failure_with_empty_output() {
        let (ok, output) = Unsupported.install_root_cert(Path::new("mitm.pem"));
        assert!(!ok);
        assert!(output.is_empty());
    }
}
