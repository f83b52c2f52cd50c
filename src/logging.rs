use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const STDERR_APPENDER: &str = "stderr";

pub fn init(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l:<5})} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized at level {level}");
    Ok(())
}
