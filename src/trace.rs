//! Logging setup.
//!
//! Library code logs through the macros re-exported here; the binary calls
//! [`init_subscriber`] once at startup.

pub use tracing::{debug, debug_span, info, warn};

/// Filter directive for a `-v`/`-q` balance: negative is quieter.
pub fn level_for(verbosity: i8) -> &'static str {
    match verbosity {
        i8::MIN..=-1 => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `verbosity` when set.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_subscriber(verbosity: i8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tangut_ids={}", level_for(verbosity))));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(-3), "error");
        assert_eq!(level_for(-1), "error");
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(7), "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_subscriber(0);
        init_subscriber(2);
    }
}
