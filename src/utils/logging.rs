//! Debug logging. Only compiled in with the `logging` feature.

#[cfg(feature = "logging")]
pub fn init_logger(
    min_level: log::LevelFilter, debug_file_name: &std::ffi::OsStr,
) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            // Local time is unsound to query in multi-threaded processes, so stick to UTC.
            let offset = time::OffsetDateTime::now_utc();
            let timestamp = offset
                .format(&time::macros::format_description!(
                    // "[[" escapes a literal bracket.
                    "[[[year]-[month]-[day]][[[hour]:[minute]:[second][subsecond digits:9]]"
                ))
                .unwrap_or_default();

            out.finish(format_args!(
                "{}[{}][{}] {}",
                timestamp,
                record.target(),
                record.level(),
                message
            ))
        })
        .level(min_level)
        .chain(fern::log_file(debug_file_name)?)
        .apply()?;

    Ok(())
}

#[macro_export]
macro_rules! info {
    ($($x:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::info!($($x)*)
        }
    };
}

#[macro_export]
macro_rules! debug {
    ($($x:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($x)*)
        }
    };
}
