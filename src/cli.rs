use std::path::PathBuf;

use clap::Parser;

/// Plot two error series (columns 1 and 2) against q (column 0).
#[derive(Parser, Debug)]
#[command(name = "errplot", version, about)]
pub struct Cli {
    /// Whitespace-delimited numeric table, at least 3 columns
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn takes_one_positional_path() {
        let cli = Cli::try_parse_from(["errplot", "data/errors.dat"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("data/errors.dat"));
    }

    #[test]
    fn missing_path_is_rejected() {
        let err = Cli::try_parse_from(["errplot"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn no_flags_accepted() {
        let err = Cli::try_parse_from(["errplot", "--color", "red", "f.dat"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
