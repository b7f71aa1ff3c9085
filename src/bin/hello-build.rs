use std::{io, process};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let code = hello_build::run(std::env::args_os(), io::stdout().lock())?;
    process::exit(code)
}
