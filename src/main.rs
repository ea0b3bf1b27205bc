#![deny(rust_2018_idioms, unused, unused_import_braces, unused_lifetimes, unused_qualifications, warnings)]
#![forbid(unsafe_code)]

use {
    std::{
        env,
        io::{
            stdin,
            stdout,
        },
        process::exit,
    },
    chrono_tz::Tz,
    clap::{
        Parser,
        error::ErrorKind,
    },
    log::{
        LevelFilter,
        debug,
    },
    tsconv::{
        Converter,
        Error,
        InputFormat,
        OutputFormat,
        Rule as _,
    },
};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Timestamps to convert. If none are given, standard input is read and each line is converted.
    #[arg(allow_negative_numbers = true)]
    timestamps: Vec<String>,
    /// Input timestamp format: unix/sec/secs, milli/millis, micro/micros, or nano/nanos.
    #[arg(long, value_name = "FORMAT", default_value_t = InputFormat::default().default_alias().to_owned())]
    from: String,
    /// Output timestamp format: rfc3339.
    #[arg(long, value_name = "FORMAT", default_value_t = OutputFormat::default().default_alias().to_owned())]
    to: String,
    /// Render output in the specified IANA timezone instead of UTC.
    #[arg(short = 'z', long, default_value_t = Tz::UTC)]
    timezone: Tz,
    /// Enable debugging mode.
    #[arg(long)]
    debug: bool,
    /// Be more verbose; specify repeatedly for greater verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        if self.debug { level.max(LevelFilter::Debug) } else { level }
    }
}

fn init_logging(level: LevelFilter) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main_inner(args: Args) -> Result<(), Error> {
    let converter = Converter::new(args.from, args.to).with_timezone(args.timezone);
    debug!("{converter:?}");
    let units = if args.timestamps.is_empty() {
        debug!("no timestamps given, reading from stdin");
        tsconv::read_units(stdin().lock())?
    } else {
        args.timestamps
    };
    converter.run(units, stdout().lock())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("* * * {e}");
                exit(1)
            }
        },
    };
    init_logging(args.log_level());
    if let Err(e) = main_inner(args) {
        eprintln!("* * * {e}");
        exit(1)
    }
}
