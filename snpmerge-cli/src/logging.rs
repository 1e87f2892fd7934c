//! Log setup for the binary.
//!
//! Events go to stderr. While a progress bar is attached, each event is written with the bar
//! suspended so log lines and the bar do not interleave.

use std::io::{self, Write};
use std::sync::RwLock;

use clap::ArgMatches;
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

static ACTIVE_BAR: RwLock<Option<ProgressBar>> = RwLock::new(None);

/// Route log output around `pb` until [`detach_progress_bar`] is called.
pub fn attach_progress_bar(pb: &ProgressBar) {
    if let Ok(mut slot) = ACTIVE_BAR.write() {
        *slot = Some(pb.clone());
    }
}

pub fn detach_progress_bar() {
    if let Ok(mut slot) = ACTIVE_BAR.write() {
        *slot = None;
    }
}

fn active_bar() -> Option<ProgressBar> {
    ACTIVE_BAR.read().ok().and_then(|slot| slot.clone())
}

/// Stderr writer that suspends the attached progress bar around every write.
pub struct BarAwareStderr;

impl Write for BarAwareStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match active_bar() {
            Some(pb) if !pb.is_hidden() => pb.suspend(|| io::stderr().write(buf)),
            _ => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set, otherwise by `--verbose`.
pub fn init_logging(matches: &ArgMatches) {
    let default_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(|| BarAwareStderr)
        .with_target(false)
        .init();
}
