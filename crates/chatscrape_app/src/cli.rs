use std::path::PathBuf;

/// Printed on any malformed invocation.
pub const USAGE: &str = "Usage: chatscrape -file <filepath> -out <outputpath>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Accepts exactly `-file <path> -out <path>`; anything else is a usage
/// error. The single-dash literal flags are part of the tool's contract.
pub fn parse(args: &[String]) -> Option<CliArgs> {
    if args.len() != 4 || args[0] != "-file" || args[2] != "-out" {
        return None;
    }
    Some(CliArgs {
        input: PathBuf::from(&args[1]),
        output: PathBuf::from(&args[3]),
    })
}
