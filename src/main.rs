use std::path::PathBuf;
use std::process;

use log::{error, info, LevelFilter};
use png_literal::{export, ChannelOrder, ExportConfig};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "png-literal",
    about = "Write a PNG image as a Rust constant of (u8,u8,u8) pixels"
)]
struct Opt {
    /// Input PNG file. Defaults to the sticker under images/ in the project
    /// root.
    #[structopt(short = "i", long = "input", parse(from_os_str))]
    input: Option<PathBuf>,

    /// Output file, relative to the working directory
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,

    /// Name of the constant
    #[structopt(short = "n", long = "name")]
    name: Option<String>,

    /// Declared array length. Must match the number of pixels in the image.
    #[structopt(short = "l", long = "length")]
    length: Option<usize>,

    /// Component order of the emitted pixels: rgb or bgr
    #[structopt(short = "c", long = "channel-order", default_value = "rgb")]
    channel_order: ChannelOrder,

    /// More logging. Repeat for even more.
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,
}

impl Opt {
    fn into_config(self) -> ExportConfig {
        let default = ExportConfig::default();

        ExportConfig {
            input: self.input.unwrap_or(default.input),
            output: self.output.unwrap_or(default.output),
            const_name: self.name.unwrap_or(default.const_name),
            declared_len: self.length.unwrap_or(default.declared_len),
            channel_order: self.channel_order,
        }
    }
}

fn setup_logging(verbose: u8) -> Result<(), fern::InitError> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "png-literal: {}: {}",
                record.level().to_string().to_lowercase(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

fn main() {
    let opt = Opt::from_args();

    if let Err(err) = setup_logging(opt.verbose) {
        eprintln!("png-literal: cannot set up logging: {}", err);
        process::exit(1);
    }

    let config = opt.into_config();

    match export(&config) {
        Ok(summary) => info!(
            "{} -> {} ({} pixels)",
            config.input.display(),
            summary.output.display(),
            summary.pixel_count
        ),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
