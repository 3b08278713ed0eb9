//! The configuration overrides of the driver, given from environment variables and lazy
//! initialized when needed.

use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use tracing::warn;


/// Default number of tour seconds to report.
const DEFAULT_TOUR_SECONDS: u32 = 30;


/// Return the seed override, if any.
///
/// To override the seed, set `GIZA_SEED=<i32>`.
pub fn seed() -> Option<i32> {
    static ENV: OnceCell<Option<i32>> = OnceCell::new();
    *ENV.get_or_init(|| parse_var("GIZA_SEED"))
}

/// Return the number of seconds of camera tour to sample, one pose per second.
///
/// To change it, set `GIZA_TOUR_SECONDS=<u32>`.
pub fn tour_seconds() -> u32 {
    static ENV: OnceCell<u32> = OnceCell::new();
    *ENV.get_or_init(|| parse_var("GIZA_TOUR_SECONDS").unwrap_or(DEFAULT_TOUR_SECONDS))
}

/// Parse an environment variable, unparsable values are ignored with a warning.
fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let value = env::var(name).ok()?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("ignoring invalid {name}={value:?}");
            None
        }
    }
}
