use movie_catalog::config::Config;

mod logging;

fn main() {
    logging::setup_logging();

    if let Err(e) = movie_catalog::run(Config::from_env()) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
