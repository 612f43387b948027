//!
//! # sample_curve
//!
//! Reads a curve description from a JSON file and prints its value at evenly spaced times
//!
//! Usage: `sample_curve <curve.json> [samples]`
//!

#[macro_use] extern crate log;

use flo_keyframes::*;

use std::io;
use std::env;
use std::fs;
use std::fmt;
use std::process;

const PACKAGE_NAME: &str        = env!("CARGO_PKG_NAME");
const PACKAGE_VERSION: &str     = env!("CARGO_PKG_VERSION");
const DEFAULT_SAMPLES: usize    = 10;

///
/// Ways sampling a curve file can fail
///
#[derive(Debug)]
enum SampleError {
    Io(io::Error),
    Curve(CurveError)
}

impl From<io::Error> for SampleError {
    fn from(err: io::Error) -> SampleError {
        SampleError::Io(err)
    }
}

impl From<CurveError> for SampleError {
    fn from(err: CurveError) -> SampleError {
        SampleError::Curve(err)
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SampleError::Io(err)    => write!(f, "{}", err),
            SampleError::Curve(err) => write!(f, "{}", err)
        }
    }
}

///
/// Formats the value of a curve at a particular time
///
fn value_at(curve: &dyn AnimationCurve, time: f64) -> Result<String, CurveError> {
    if let Some(curve) = curve.as_float_curve() {
        Ok(format!("{}", curve.value_at(time)?))
    } else if let Some(curve) = curve.as_color_curve() {
        Ok(format!("#{:08x}", curve.value_at(time)?.to_argb()))
    } else if let Some(curve) = curve.as_transform_curve() {
        Ok(format!("{:?}", curve.value_at(time)?.apply().0))
    } else if let Some(curve) = curve.as_filter_curve() {
        Ok(format!("{:?}", curve.value_at(time)?.operations()))
    } else {
        Ok(String::new())
    }
}

///
/// Samples the curve described by a JSON string, returning a 'time value' line for each sample
///
fn sample_curve(json: &str, samples: usize) -> Result<Vec<String>, SampleError> {
    let description = AnyCurveDescription::from_json(json)?;
    let curve       = description.to_curve()?;

    let start       = curve.start_time()?;
    let duration    = curve.duration()?;
    let samples     = samples.max(1);

    info!("Sampling {:?} curve at {} points over {}s", curve.curve_type(), samples+1, duration);

    (0..=samples)
        .map(|sample| -> Result<String, SampleError> {
            let time = start + duration * (sample as f64) / (samples as f64);
            Ok(format!("{} {}", time, value_at(&*curve, time)?))
        })
        .collect()
}

fn run(path: &str, samples: usize) -> Result<(), SampleError> {
    let json = fs::read_to_string(path)?;

    for line in sample_curve(&json, samples)? {
        println!("{}", line);
    }

    Ok(())
}

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("{} v{}", PACKAGE_NAME, PACKAGE_VERSION);
        eprintln!("Usage: {} <curve.json> [samples]", PACKAGE_NAME);
        process::exit(1);
    }

    let samples = args.get(2)
        .and_then(|samples| samples.parse::<usize>().ok())
        .unwrap_or(DEFAULT_SAMPLES);

    if let Err(err) = run(&args[1], samples) {
        eprintln!("{}: {}", args[1], err);
        process::exit(1);
    }
}
