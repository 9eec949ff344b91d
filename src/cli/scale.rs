//! Scale command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thiserror::Error;

use crate::algorithms::{Algorithm, AlgorithmError};
use crate::bitmap;
use crate::config::{load_config, merge_cli_overrides, CliOverrides};

use super::{init_logging, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Positional arguments that could not be interpreted
#[derive(Debug, Error, PartialEq)]
pub(crate) enum ArgsError {
    #[error("expected [ALGORITHM] INPUT [OUTPUT], got {0} argument(s)")]
    Count(usize),
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

/// What the positional arguments asked for.
#[derive(Debug, PartialEq)]
pub(crate) struct Invocation {
    pub algorithm: Option<Algorithm>,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

/// Interpret `[ALGORITHM] INPUT [OUTPUT]`.
///
/// Two arguments are `ALGORITHM INPUT`. When the config file names an
/// algorithm (`configured`), a first argument that names none makes the
/// pair `INPUT OUTPUT` instead; without one it is an unknown algorithm.
pub(crate) fn parse_args(args: &[String], configured: bool) -> Result<Invocation, ArgsError> {
    match args {
        [input] => Ok(Invocation { algorithm: None, input: PathBuf::from(input), output: None }),
        [first, second] => match Algorithm::from_name(first) {
            Ok(algorithm) => {
                Ok(Invocation { algorithm: Some(algorithm), input: PathBuf::from(second), output: None })
            }
            Err(_) if configured => Ok(Invocation {
                algorithm: None,
                input: PathBuf::from(first),
                output: Some(PathBuf::from(second)),
            }),
            Err(e) => Err(e.into()),
        },
        [algorithm, input, output] => Ok(Invocation {
            algorithm: Some(Algorithm::from_name(algorithm)?),
            input: PathBuf::from(input),
            output: Some(PathBuf::from(output)),
        }),
        _ => Err(ArgsError::Count(args.len())),
    }
}

/// Execute the scale command
pub fn run_scale(args: &[String], config_path: Option<&Path>, jobs: Option<usize>, verbose: bool) -> ExitCode {
    let mut config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let invocation = match parse_args(args, config.scale.algorithm.is_some()) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let overrides = CliOverrides {
        algorithm: invocation.algorithm,
        output: invocation.output,
        jobs,
        log_level: verbose.then(|| "debug".to_string()),
    };
    merge_cli_overrides(&mut config, &overrides);
    init_logging(config.log_level());

    if let Some(n) = config.scale.jobs {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(n).build_global() {
            tracing::warn!("could not size the worker pool to {} threads: {}", n, e);
        }
    }

    let algorithm = config.algorithm();
    let output = config.scale.output;

    let input = match bitmap::load(&invocation.input, algorithm.padding()) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    tracing::info!(
        algorithm = algorithm.name(),
        input = %invocation.input.display(),
        output = %output.display(),
        "scaling now"
    );

    let scaled = match algorithm.scale(&input) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(e) = bitmap::save(&scaled, &output) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    tracing::info!(width = scaled.width(), height = scaled.height(), "wrote {}", output.display());
    ExitCode::from(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_arg_is_input() {
        let inv = parse_args(&args(&["sprite.bmp"]), false).unwrap();
        assert_eq!(inv, Invocation { algorithm: None, input: PathBuf::from("sprite.bmp"), output: None });
    }

    #[test]
    fn test_two_args_algorithm_then_input() {
        for configured in [false, true] {
            let inv = parse_args(&args(&["hq3xB", "sprite.bmp"]), configured).unwrap();
            assert_eq!(inv.algorithm, Some(Algorithm::Hq3xB));
            assert_eq!(inv.input, PathBuf::from("sprite.bmp"));
            assert_eq!(inv.output, None);
        }
    }

    #[test]
    fn test_two_args_input_then_output_with_configured_algorithm() {
        let inv = parse_args(&args(&["sprite.bmp", "big.bmp"]), true).unwrap();
        assert_eq!(inv.algorithm, None);
        assert_eq!(inv.input, PathBuf::from("sprite.bmp"));
        assert_eq!(inv.output, Some(PathBuf::from("big.bmp")));
    }

    #[test]
    fn test_two_args_unknown_algorithm_without_config() {
        // `hq2x` is not a full name: the variant letter is missing
        let err = parse_args(&args(&["hq2x", "in.bmp"]), false).unwrap_err();
        assert!(matches!(err, ArgsError::Algorithm(AlgorithmError::Unknown { ref name }) if name == "hq2x"));
    }

    #[test]
    fn test_three_args() {
        let inv = parse_args(&args(&["scale3xPad", "in.bmp", "out.bmp"]), false).unwrap();
        assert_eq!(inv.algorithm, Some(Algorithm::Scale3x));
        assert_eq!(inv.input, PathBuf::from("in.bmp"));
        assert_eq!(inv.output, Some(PathBuf::from("out.bmp")));
    }

    #[test]
    fn test_three_args_unknown_algorithm() {
        let err = parse_args(&args(&["lanczos", "in.bmp", "out.bmp"]), true).unwrap_err();
        assert!(matches!(err, ArgsError::Algorithm(AlgorithmError::Unknown { .. })));
        assert!(err.to_string().contains("lanczos"));
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse_args(&[], false).unwrap_err(), ArgsError::Count(0));
    }
}
