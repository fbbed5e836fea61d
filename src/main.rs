use std::io;
use std::process::ExitCode;

use log::error;

use console_chess::session::{Invocation, Session, SessionError, SessionOptions};

fn run() -> Result<(), SessionError> {
    let options = match SessionOptions::from_args(std::env::args().skip(1))? {
        Invocation::Play(options) => options,
        Invocation::Help => {
            print!("{}", SessionOptions::usage());
            return Ok(());
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), options).run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(SessionError::Options(e)) => {
            eprintln!("{e}\n\n{}", SessionOptions::usage());
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
