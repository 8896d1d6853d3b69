use crate::error::AppError;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config, Handle,
};
use std::env;

const LEVEL_VAR: &str = "DELTATIME_LOG";

pub fn level_from_env() -> LevelFilter {
    env::var(LEVEL_VAR)
        .ok()
        .and_then(|level| parse_level(&level))
        .unwrap_or(LevelFilter::Info)
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}

pub fn init_logging(level: LevelFilter) -> Result<Handle, AppError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    Ok(log4rs::init_config(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("chatty"), None);
    }
}
