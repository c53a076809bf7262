/// Headless slider demo entry point
fn main() {
    use clap::Parser;
    use slidebar::{run, Settings};

    let settings = Settings::parse();

    env_logger::Builder::new()
        .filter_level(settings.log_level.to_level_filter())
        .init();

    if let Err(e) = run(&settings) {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
