use std::{
    ffi::OsStr,
    io::{self, Write},
};

/// Name used when no argument is given
pub const DEFAULT_NAME: &str = "world";

/// Pick the name to greet from the user-supplied arguments.
///
/// The first argument is taken as-is, without trimming, case folding
/// or UTF-8 validation. Any further arguments are ignored.
pub fn select_name<S: AsRef<OsStr>>(args: &[S]) -> &OsStr {
    args.first()
        .map(|s| s.as_ref())
        .unwrap_or_else(|| OsStr::new(DEFAULT_NAME))
}

/// `Hello, {name}!`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting<'a> {
    name: &'a OsStr,
}

impl<'a> Greeting<'a> {
    pub fn new(name: &'a OsStr) -> Self {
        Greeting { name }
    }

    pub fn name(&self) -> &'a OsStr {
        self.name
    }

    /// Write the greeting and a line terminator.
    ///
    /// The name is written byte for byte, so arguments which are not valid
    /// UTF-8 come out exactly as they were passed.
    pub fn write_line<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"Hello, ")?;
        out.write_all(self.name.as_encoded_bytes())?;
        out.write_all(b"!\n")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn line(name: &str) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        Greeting::new(OsStr::new(name)).write_line(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn default_name() {
        let args: [&str; 0] = [];
        assert_eq!(select_name(&args), "world");
    }

    #[test]
    fn first_argument_wins() {
        assert_eq!(select_name(&["CI"]), "CI");
        assert_eq!(select_name(&["CI", "extra", "ignored"]), "CI");
        assert_eq!(select_name(&["--", "CI"]), "--");
        assert_eq!(
            select_name(&["Ada Lovelace".to_string(), "x".to_string()]),
            "Ada Lovelace"
        );
    }

    #[test]
    fn name_is_not_normalized() {
        assert_eq!(select_name(&["  Padded  "]), "  Padded  ");
        assert_eq!(select_name(&["SHOUT"]), "SHOUT");
        assert_eq!(select_name(&[""]), "");
    }

    #[test]
    fn greeting() -> anyhow::Result<()> {
        assert_eq!(line("world")?, "Hello, world!\n");
        assert_eq!(line("CI")?, "Hello, CI!\n");
        assert_eq!(line("Ada Lovelace")?, "Hello, Ada Lovelace!\n");
        assert_eq!(line("")?, "Hello, !\n");
        assert_eq!(line("世界")?, "Hello, 世界!\n");
        assert_eq!(line(" \t ")?, "Hello,  \t !\n");
        Ok(())
    }

    #[test]
    fn greeting_keeps_name() {
        let g = Greeting::new(OsStr::new("CI"));
        assert_eq!(g.name(), "CI");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_is_written_verbatim() -> anyhow::Result<()> {
        use std::os::unix::ffi::OsStrExt;
        let mut buf = Vec::new();
        Greeting::new(OsStr::from_bytes(b"f\x80o")).write_line(&mut buf)?;
        assert_eq!(buf, b"Hello, f\x80o!\n");
        Ok(())
    }
}
