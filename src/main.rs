//! Fabline entry point.

use fabline::audit::AuditLogger;
use fabline::config::Config;
use fabline::output::{format_error, format_output};
use fabline::parse_arguments;

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let cwd = env::current_dir().ok();

    // Fall back to defaults on a broken config
    let config = match Config::load(cwd.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            Config::default()
        }
    };

    let result = parse_arguments(&args, &config.name_rules());

    if let Some(path) = config.audit_path() {
        if let Ok(mut logger) = AuditLogger::open(path) {
            let _ = logger.log_run(args.as_slice(), cwd.as_deref(), &result);
        }
    }

    match &result {
        Ok(output) => {
            print!("{}", format_output(output, config.output_format()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", format_error(e));
            ExitCode::from(1)
        }
    }
}
