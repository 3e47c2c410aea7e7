//! deskctl -- stdio bridge for host scripting processes.
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout. Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use deskctl::{bridge, Config, DeskControl};

const DEFAULT_CONFIG_FILE: &str = "deskctl.toml";

/// `DESKCTL_CONFIG` if set, otherwise `deskctl.toml` in the working
/// directory when present, otherwise the built-in defaults.
fn load_config() -> Result<Config, deskctl::config::ConfigError> {
    let path = match std::env::var_os("DESKCTL_CONFIG") {
        Some(p) => PathBuf::from(p),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !local.exists() {
                return Ok(Config::default());
            }
            local
        }
    };
    Config::load(&path)
}

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("deskctl: {e}");
            std::process::exit(2);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log.level))
        .init();
    log::info!("deskctl v{}", env!("CARGO_PKG_VERSION"));

    let ctl = DeskControl::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("bridge: stdin read failed: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let response = bridge::handle_line(&ctl, &line);
        if writeln!(stdout, "{response}").and_then(|_| stdout.flush()).is_err() {
            // Host closed the pipe.
            break;
        }
    }

    log::info!("deskctl: stdin closed, exiting");
}
