use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use glossar_core::config::ClientConfig;
use glossar_core::protocol::Session;
use glossar_core::services::transport::HttpTransport;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ClientConfig::load() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let transport = match HttpTransport::new(&config) {
        Ok(t) => t,
        Err(e) => {
            log::error!("failed to set up http client: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("glossar-core ready, backend {}", config.base_url);
    let session = Session::new(config, transport);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => continue,
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| session.handle(&line)));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => serde_json::json!({
                "status": "error",
                "message": "internal core error"
            })
            .to_string(),
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }

    ExitCode::SUCCESS
}
