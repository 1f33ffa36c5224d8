mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::{CliOutputFormat, CliScore};

use readability_shared_kernel::{PresentationError, Result};

use crate::config::Config;

fn validate_file_arg(args: &Args) -> Result<()> {
    if args.file.is_dir() {
        return Err(PresentationError::InvalidValue {
            flag: "<FILE>".to_string(),
            value: args.file.display().to_string(),
            reason: "is a directory, expected a text file".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Convert parsed CLI arguments into a [`Config`].
///
/// # Errors
///
/// Returns `Err` when an argument passes clap but is still unusable,
/// such as a directory given as the input file.
pub fn build_config(args: Args) -> Result<Config> {
    validate_file_arg(&args)?;
    Ok(Config::from(args))
}
