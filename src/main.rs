//! pxscale - Command-line front end for the pixelscale upscalers

use std::process::ExitCode;

use pixelscale::cli;

fn main() -> ExitCode {
    cli::run()
}
