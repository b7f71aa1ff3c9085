//! Command-line surface of `hello-build`

use crate::{error::*, greeting::*};
use clap::Parser;
use std::{
    ffi::{OsStr, OsString},
    io::Write,
    iter,
};

/// Status code returned by [run]
pub const SUCCESS: i32 = 0;

/// Print a greeting for NAME, or for `world` if omitted
///
/// There are no flags: every token, including `--` and ones starting
/// with `-`, is a positional value. Only the first one is used.
#[derive(Debug, Parser)]
#[command(
    name = "hello-build",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Opt {
    /// Name to greet, followed by anything which is ignored
    #[arg(value_name = "NAME", value_parser = clap::value_parser!(OsString))]
    args: Vec<OsString>,
}

impl Opt {
    /// Parse user-supplied arguments, `args` starts with the program name.
    ///
    /// An end-of-options marker is placed right after the program name,
    /// so clap never interprets the user's tokens.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("hello-build"));
        let escaped = iter::once(bin)
            .chain(iter::once(OsString::from("--")))
            .chain(args);
        Opt::parse_from(escaped)
    }

    /// Name selected from the positional arguments
    pub fn name(&self) -> &OsStr {
        select_name(&self.args)
    }
}

/// Parse `args`, write the greeting into `out`, and return the status code.
///
/// `args` starts with the program name as [std::env::args_os] does,
/// so the first user-supplied argument is the second item.
/// Only a failure to write into `out` is an error.
pub fn run<I, T, W>(args: I, mut out: W) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let opt = Opt::from_args(args);
    let greeting = Greeting::new(opt.name());
    log::debug!("Greeting {:?}", greeting.name());
    greeting.write_line(&mut out)?;
    out.flush()?;
    Ok(SUCCESS)
}
