use std::process::ExitCode;

mod commands;

use sls_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    let args = match commands::parse(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            log::error!("[parse] {e}");
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    commands::list::run(args)
}
