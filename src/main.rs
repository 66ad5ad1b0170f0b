use std::thread;
use std::time::{Duration, Instant};

use app_common::platform;
use app_common::utils::console_logger::ConsoleLogger;
use app_common::{files, AppConfig, FpsCounter};

fn main() {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let config = AppConfig::default();
    for folder in config.folders() {
        match files::sub_folder(folder) {
            Ok(path) => log::info!("Folder ready: {}", path.display()),
            Err(err) => log::error!("Could not prepare folder {folder}: {err:#}"),
        }
    }

    let caps = platform::current();
    caps.set_dpi_awareness();

    match files::sub_file(config.mitm_conf_folder, "mitmproxy-ca-cert.cer") {
        Ok(cert) if files::wait_for_file(&cert, Duration::ZERO) => {
            let (ok, output) = caps.install_root_cert(&cert);
            if ok {
                log::info!("Root certificate installed: {}", output.trim());
            } else {
                log::warn!("Root certificate installation failed");
            }
        }
        Ok(cert) => log::info!("No certificate at {} yet, skipping install", cert.display()),
        Err(err) => log::error!("Could not resolve certificate path: {err:#}"),
    }

    // Short self-check: tick at ~60 Hz and show the measured rate in place.
    let mut counter = FpsCounter::new();
    let mut console = ConsoleLogger::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    while Instant::now() < deadline {
        thread::sleep(Duration::from_millis(16));
        counter.frame();
        console.fps(counter.fps());
    }
    console.cleanup();
}
