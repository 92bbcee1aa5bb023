//! File glue for the binary: read each input whole, run the pipeline, write the result.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::{info, warn};

use super::compress::compress_with;
use super::decompress::decompress_with;
use crate::error::{Error, Result};
use crate::tools::cli::{BwzOpts, Mode, Output, EXTENSION};
use crate::tools::mtf::BLOCK_SEED;
use crate::tools::timer::Timer;

/// Process every input file named in opts. Stops at the first failure.
pub fn run(opts: &BwzOpts, timer: &mut Timer) -> Result<()> {
    if opts.files.len() > 1 && matches!(opts.output, Output::Named(_)) {
        warn!("Several inputs share one output name; only the first can be written without -f.");
    }
    for file in &opts.files {
        info!("{} {} (output: {})", opts.op_mode, file, opts.output);
        match opts.op_mode {
            Mode::Zip => compress_file(file, opts, timer)?,
            Mode::Unzip => decompress_file(file, opts, timer)?,
            Mode::Test => test_file(file, timer)?,
        }
    }
    Ok(())
}

/// Default output name for `input`. Compressing appends `.bwz`. Decompressing strips it, or
/// appends `.out` when the input does not carry it.
pub fn output_name(input: &str, mode: Mode) -> String {
    match mode {
        Mode::Unzip => match input.strip_suffix(EXTENSION) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => format!("{}.out", input),
        },
        _ => format!("{}{}", input, EXTENSION),
    }
}

fn compress_file(file: &str, opts: &BwzOpts, timer: &mut Timer) -> Result<()> {
    let data = fs::read(file)?;
    timer.mark("read");
    let packed = compress_with(&data, &BLOCK_SEED, timer)?;
    report(data.len(), packed.len());
    write_output(file, &packed, opts, timer)
}

fn decompress_file(file: &str, opts: &BwzOpts, timer: &mut Timer) -> Result<()> {
    let data = fs::read(file)?;
    timer.mark("read");
    let restored = decompress_with(&data, &BLOCK_SEED, timer)?;
    write_output(file, &restored, opts, timer)
}

/// Compress and decompress in memory and compare with the input. Nothing is written.
fn test_file(file: &str, timer: &mut Timer) -> Result<()> {
    let data = fs::read(file)?;
    timer.mark("read");
    let packed = compress_with(&data, &BLOCK_SEED, timer)?;
    let restored = decompress_with(&packed, &BLOCK_SEED, timer)?;
    report(data.len(), packed.len());
    if let Some(position) = first_difference(&data, &restored) {
        return Err(Error::VerifyFailed {
            path: file.to_string(),
            position,
        });
    }
    info!("{}: ok", file);
    Ok(())
}

fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(i) => Some(i),
        None if a.len() != b.len() => Some(a.len().min(b.len())),
        None => None,
    }
}

fn write_output(input: &str, bytes: &[u8], opts: &BwzOpts, timer: &mut Timer) -> Result<()> {
    let target = match &opts.output {
        Output::Stdout => {
            let mut out = io::stdout().lock();
            out.write_all(bytes)?;
            out.flush()?;
            timer.mark("write");
            return Ok(());
        }
        Output::Named(name) => name.clone(),
        Output::File => output_name(input, opts.op_mode),
    };

    if same_file(input, &target) {
        return Err(Error::OutputIsInput { path: target });
    }
    if Path::new(&target).exists() && !opts.force_overwrite {
        return Err(Error::OutputExists { path: target });
    }
    fs::write(&target, bytes)?;
    info!("Wrote {} bytes to {}.", bytes.len(), target);

    if !opts.keep_input_files {
        fs::remove_file(input)?;
        info!("Removed {}.", input);
    }
    timer.mark("write");
    Ok(())
}

/// True when both paths resolve to the same existing file.
fn same_file(a: &str, b: &str) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Compression ratio as "x.y:1" and the share of space saved, in percent.
pub fn ratio(input_len: usize, output_len: usize) -> (String, f64) {
    if input_len == 0 || output_len == 0 {
        return ("-".to_string(), 0.0);
    }
    let ratio = input_len as f64 / output_len as f64;
    let saving = 100.0 * (1.0 - output_len as f64 / input_len as f64);
    (format!("{:.1}:1", ratio), saving)
}

fn report(input_len: usize, output_len: usize) {
    let (ratio, saving) = ratio(input_len, output_len);
    info!(
        "{} bytes in, {} bytes out. Ratio {}, {:.2}% saved.",
        input_len, output_len, ratio, saving
    );
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bwzip-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn opts(mode: Mode, file: &Path) -> BwzOpts {
        BwzOpts {
            files: vec![file.to_string_lossy().into_owned()],
            op_mode: mode,
            ..BwzOpts::new()
        }
    }

    #[test]
    fn output_names() {
        assert_eq!(output_name("notes.txt", Mode::Zip), "notes.txt.bwz");
        assert_eq!(output_name("notes.txt.bwz", Mode::Unzip), "notes.txt");
        assert_eq!(output_name("notes.bin", Mode::Unzip), "notes.bin.out");
        assert_eq!(output_name(".bwz", Mode::Unzip), ".bwz.out");
    }

    #[test]
    fn ratio_formatting() {
        let (r, saving) = ratio(1000, 250);
        assert_eq!(r, "4.0:1");
        assert!((saving - 75.0).abs() < 1e-9);
        assert_eq!(ratio(0, 3).0, "-");
    }

    #[test]
    fn first_difference_test() {
        assert_eq!(first_difference(b"abc", b"abc"), None);
        assert_eq!(first_difference(b"abc", b"abd"), Some(2));
        assert_eq!(first_difference(b"abc", b"ab"), Some(2));
    }

    #[test]
    fn file_round_trip() {
        let dir = scratch("round-trip");
        let input = dir.join("sample.txt");
        let data = b"to be or not to be, that is the question. ".repeat(20);
        fs::write(&input, &data).unwrap();

        let mut timer = Timer::new();
        run(&opts(Mode::Zip, &input), &mut timer).unwrap();
        let packed = dir.join("sample.txt.bwz");
        assert!(packed.exists());
        assert!(input.exists());

        // The original is still there, so decompressing needs force
        let mut unzip = opts(Mode::Unzip, &packed);
        assert!(matches!(
            run(&unzip, &mut timer),
            Err(Error::OutputExists { .. })
        ));
        unzip.force_overwrite = true;
        unzip.keep_input_files = false;
        run(&unzip, &mut timer).unwrap();
        assert_eq!(fs::read(&input).unwrap(), data);
        assert!(!packed.exists());

        run(&opts(Mode::Test, &input), &mut timer).unwrap();
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn named_output() {
        let dir = scratch("named");
        let input = dir.join("in.dat");
        let target = dir.join("custom.bin");
        fs::write(&input, [255_u8, 0, 255, 255, 7]).unwrap();

        let mut zip = opts(Mode::Zip, &input);
        zip.output = Output::Named(target.to_string_lossy().into_owned());
        run(&zip, &mut Timer::new()).unwrap();
        assert!(target.exists());
        assert!(!dir.join("in.dat.bwz").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn output_over_input_is_refused() {
        let dir = scratch("same-file");
        let input = dir.join("only-copy.txt");
        let data = b"the only copy of this text".to_vec();
        fs::write(&input, &data).unwrap();

        // -f --remove -o only-copy.txt only-copy.txt
        let mut zip = opts(Mode::Zip, &input);
        zip.output = Output::Named(input.to_string_lossy().into_owned());
        zip.force_overwrite = true;
        zip.keep_input_files = false;
        assert!(matches!(
            run(&zip, &mut Timer::new()),
            Err(Error::OutputIsInput { .. })
        ));

        // The same file reached through a different spelling
        let other_spelling = dir.join(".").join("only-copy.txt");
        zip.output = Output::Named(other_spelling.to_string_lossy().into_owned());
        assert!(matches!(
            run(&zip, &mut Timer::new()),
            Err(Error::OutputIsInput { .. })
        ));
        assert_eq!(fs::read(&input).unwrap(), data);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_input() {
        let dir = scratch("missing");
        let input = dir.join("nope.txt");
        assert!(matches!(
            run(&opts(Mode::Zip, &input), &mut Timer::new()),
            Err(Error::Io(_))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }
}
