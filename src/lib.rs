use std::io;

pub mod catalog;
pub mod config;
pub mod error;
pub mod menu;
pub mod model;
pub mod persisters;
pub mod store;

use config::Config;
use error::CatalogError;
use menu::MenuLoop;
use store::CatalogStore;

pub fn run(config: Config) -> Result<(), CatalogError> {
    log::info!("Using catalog file {}", config.db_file.display());

    let store = CatalogStore::new(config.db_file);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut menu = MenuLoop::new(store, config.export_file, stdin.lock(), stdout.lock());
    menu.run()
}
