//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` on a local HTTP port.
//!
//! `cargo run -- 9000` picks a different port.

use std::process::{Command, ExitCode, Stdio};
use std::{env, thread, time::Duration};

use tracing::{error, info, warn, Level};

const DEFAULT_PORT: u16 = 8000;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let port = match env::args().nth(1).map(|arg| arg.parse::<u16>()) {
        None => DEFAULT_PORT,
        Some(Ok(port)) => port,
        Some(Err(err)) => {
            error!(%err, "port must be a number");
            return ExitCode::FAILURE;
        }
    };

    info!("building wasm bundle");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(st) => {
            error!(%st, "wasm-pack finished with errors");
            return ExitCode::FAILURE;
        }
        Err(_) => {
            warn!("wasm-pack not found in PATH; serving whatever is already in static/pkg");
        }
    }

    info!("serving http://127.0.0.1:{port}/");
    let mut server = match Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            error!(%err, "failed to start http server");
            return ExitCode::FAILURE;
        }
    };

    loop {
        match server.try_wait() {
            Ok(Some(status)) => {
                warn!(%status, "http server exited");
                return ExitCode::FAILURE;
            }
            Ok(None) => thread::sleep(Duration::from_secs(5)),
            Err(err) => {
                error!(%err, "lost track of http server");
                return ExitCode::FAILURE;
            }
        }
    }
}
