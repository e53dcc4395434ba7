use log::LevelFilter;

pub fn init_logging() {
    env_logger::builder()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(LevelFilter::Info)
        .init()
}

#[cfg(test)]
#[ctor::ctor]
fn init() {
    env_logger::builder()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(LevelFilter::Debug)
        .is_test(true)
        .parse_default_env()
        .init()
}
