use crate::error::Error;
use crate::input::{ByteOrder, InputFormat};
use splash_image::Splash;
use std::{fs, path::PathBuf, process};
use structopt::StructOpt;
use tracing::{debug, error, info, warn};

mod error;
mod input;
mod output;

const ABOUT: &str = r#"Generates the splash-image crate's RGB565 sample table

The input must already be packed RGB565 at the splash dimensions, either a raw
dump of 16-bit samples or a C header holding the array initializer. In a
header, the first `= { ... }` initializer is taken as the sample table.

Examples:
    # Check a header exported by TFT_eSPI's ImageConverter without writing anything
    splash-gen -i splash_image.h --check

    # Regenerate ../../src/splash_image.rs from a little-endian raw dump
    splash-gen -i splash.bin --little-endian
"#;

#[derive(Debug, StructOpt)]
#[structopt(about = ABOUT)]
pub struct Opts {
    /// Converter output containing the RGB565 samples
    #[structopt(name = "input file", long = "input", short = "i")]
    pub input: PathBuf,

    /// Input format (raw or header), inferred from the file extension when omitted
    #[structopt(name = "format", long, short = "f")]
    pub format: Option<InputFormat>,

    /// Raw input stores the least significant byte of each sample first
    #[structopt(long = "little-endian")]
    pub little_endian: bool,

    /// Rust source file to write
    #[structopt(
        name = "output file",
        long = "output",
        short = "o",
        default_value = "../../src/splash_image.rs"
    )]
    pub output: PathBuf,

    /// Validate the input and report, without writing the output
    #[structopt(long)]
    pub check: bool,
}

impl Opts {
    fn input_format(&self) -> InputFormat {
        self.format
            .unwrap_or_else(|| InputFormat::from_path(&self.input))
    }

    fn byte_order(&self) -> ByteOrder {
        if self.little_endian {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let opts = Opts::from_args();
    if let Err(e) = run(&opts) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(opts: &Opts) -> Result<(), Error> {
    let format = opts.input_format();
    info!("Reading {} ({})", opts.input.display(), format);

    let samples = match format {
        InputFormat::Raw => {
            let bytes = fs::read(&opts.input)?;
            debug!("{} bytes, {:?} endian", bytes.len(), opts.byte_order());
            input::read_raw(&bytes, opts.byte_order())?
        }
        InputFormat::Header => {
            let text = fs::read_to_string(&opts.input)?;
            input::read_header(&text)?
        }
    };

    let splash = Splash::new(&samples)?;
    let non_zero = splash.raw().iter().filter(|&&s| s != 0).count();
    info!("{} samples, {} non-zero", splash.len(), non_zero);
    if splash.is_placeholder() {
        warn!("All samples are zero, the output is the blank placeholder");
    }

    if opts.check {
        info!("Check passed");
        return Ok(());
    }

    fs::write(&opts.output, output::render(&splash))?;
    info!("Wrote {}", opts.output.display());

    Ok(())
}
