//! `orbit-glide` binary: opens the camera viewer, or traces poses
//! headlessly with `--trace FRAMES`.

use std::path::Path;

use orbit_glide::{error::GlideError, options::Options, trace, viewer::Viewer};

/// Parsed command line.
struct Args {
    trace_frames: Option<u64>,
    options_path: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, GlideError> {
    let mut parsed = Args {
        trace_frames: None,
        options_path: None,
    };
    while let Some(arg) = args.next() {
        if arg == "--trace" {
            let count = args.next().ok_or_else(|| {
                GlideError::InvalidArgument("--trace needs a frame count".into())
            })?;
            let frames = count.parse().map_err(|_| {
                GlideError::InvalidArgument(format!("bad frame count: {count}"))
            })?;
            parsed.trace_frames = Some(frames);
        } else if parsed.options_path.is_none() {
            parsed.options_path = Some(arg);
        } else {
            return Err(GlideError::InvalidArgument(format!(
                "unexpected argument: {arg}"
            )));
        }
    }
    Ok(parsed)
}

fn run() -> Result<(), GlideError> {
    let args = parse_args(std::env::args().skip(1))?;

    let options = match &args.options_path {
        Some(path) => {
            log::info!("loading options from {path}");
            Options::load(Path::new(path))?
        }
        None => Options::default(),
    };

    if let Some(frames) = args.trace_frames {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        return trace::write_trace(&options, frames, &mut out);
    }

    Viewer::builder().with_options(options).build().run()
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        log::error!("Usage: orbit-glide [--trace FRAMES] [OPTIONS.toml]");
        std::process::exit(1);
    }
}
