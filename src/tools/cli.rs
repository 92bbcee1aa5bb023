use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::LevelFilter;

/// Suffix given to compressed files.
pub const EXTENSION: &str = ".bwz";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

impl From<u8> for Verbosity {
    fn from(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the output channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Output file named after the input
    File,
    /// Output file named by the user
    Named(String),
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Named(name) => write!(f, "{}", name),
            other => write!(f, "{:?}", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BwzOpts {
    /// Vec of names of files to read for input
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl BwzOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            keep_input_files: true,
            op_mode: Mode::Zip,
            output: Output::File,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for BwzOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// bwzip, a block-sorting file compressor.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Args {
    /// Compress (the default)
    #[clap(short = 'z', long = "compress", conflicts_with_all = &["decompress", "test"])]
    pub compress: bool,

    /// Decompress
    #[clap(short, long, conflicts_with = "test")]
    pub decompress: bool,

    /// Compress and decompress in memory and compare, writing nothing
    #[clap(short, long)]
    pub test: bool,

    /// Write to standard out
    #[clap(short = 'c', long, conflicts_with = "output")]
    pub stdout: bool,

    /// Write to this file instead of one named after the input
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Overwrite existing output files
    #[clap(short, long)]
    pub force: bool,

    /// Delete input files after successful processing
    #[clap(long)]
    pub remove: bool,

    /// Verbosity, 0 (quiet) to 5 (trace)
    #[clap(short, long, default_value_t = 2, value_name = "LEVEL")]
    pub verbose: u8,

    /// Files to process
    #[clap(value_name = "FILES", required = true)]
    pub files: Vec<String>,
}

impl From<Args> for BwzOpts {
    fn from(args: Args) -> Self {
        let op_mode = if args.test {
            Mode::Test
        } else if args.decompress {
            Mode::Unzip
        } else {
            Mode::Zip
        };
        let output = match (args.stdout, args.output) {
            (true, _) => Output::Stdout,
            (false, Some(name)) => Output::Named(name),
            (false, None) => Output::File,
        };
        Self {
            files: args.files,
            force_overwrite: args.force,
            keep_input_files: !args.remove,
            op_mode,
            output,
            verbose: Verbosity::from(args.verbose),
        }
    }
}

/// Parse the command line and set the log level.
pub fn bwzopts_init() -> BwzOpts {
    let opts = BwzOpts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());
    opts
}
