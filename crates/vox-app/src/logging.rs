//! `tracing-subscriber` setup.

use tracing_subscriber::EnvFilter;
use vox_config::schema::LogLevel;

/// Crate targets that receive the configured level. `RUST_LOG` still wins
/// for anything it names explicitly.
const LOG_TARGETS: &[&str] = &["vox", "vox_renderer", "vox_config"];

/// Pick the level from `--log-level`, falling back to the config value.
///
/// An unparseable override is reported back so it can be logged once the
/// subscriber exists.
pub fn resolve_level(cli: Option<&str>, configured: LogLevel) -> (LogLevel, Option<String>) {
    match cli.map(str::parse::<LogLevel>) {
        Some(Ok(level)) => (level, None),
        Some(Err(e)) => (configured, Some(e)),
        None => (configured, None),
    }
}

pub fn directives(level: LogLevel) -> Vec<String> {
    LOG_TARGETS
        .iter()
        .map(|target| level.directive_for(target))
        .collect()
}

pub fn init(level: LogLevel) {
    let mut filter = EnvFilter::from_default_env();
    for directive in directives(level) {
        match directive.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("invalid log directive {directive}: {e}"),
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_overrides_config() {
        assert_eq!(
            resolve_level(Some("debug"), LogLevel::Error),
            (LogLevel::Debug, None)
        );
        assert_eq!(resolve_level(None, LogLevel::Error), (LogLevel::Error, None));
    }

    #[test]
    fn bad_cli_level_falls_back() {
        let (level, warning) = resolve_level(Some("chatty"), LogLevel::Info);
        assert_eq!(level, LogLevel::Info);
        assert!(warning.unwrap().contains("chatty"));
    }

    #[test]
    fn one_directive_per_target() {
        let d = directives(LogLevel::Warning);
        assert_eq!(d, vec!["vox=warn", "vox_renderer=warn", "vox_config=warn"]);
        for directive in d {
            assert!(directive
                .parse::<tracing_subscriber::filter::Directive>()
                .is_ok());
        }
    }
}
