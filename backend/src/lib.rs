pub mod catchers;
pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod seed;
pub mod store;
pub use shared::{models::*, election::*, validation::*};

use rocket::{routes, catchers, Build, Rocket};

use crate::config::{AppConfig, StorageKind};
use crate::cors::CORS;
use crate::routes::AppState;
use crate::store::{ElectionStore, FileStore, MemoryStore, StoreError};

/// Assembles the API rocket for the configured storage backend. The static
/// page routes are mounted on top of this by `main`.
pub fn build(config: &AppConfig) -> Result<Rocket<Build>, StoreError> {
    let store: Box<dyn ElectionStore> = match config.storage {
        StorageKind::Memory => Box::new(MemoryStore::new()),
        StorageKind::File => Box::new(FileStore::open(&config.data_dir)?),
    };

    Ok(rocket::build()
        .attach(CORS)
        .manage(AppState::new(store))
        .mount(
            "/api",
            routes![
                routes::login,
                routes::list_candidates,
                routes::check_voted,
                routes::check_voted_by_path,
                routes::cast_vote,
                routes::get_results,
                routes::all_options,
                routes::login_wrong_method,
                routes::vote_wrong_method,
                routes::candidates_wrong_method,
                routes::results_wrong_method,
                routes::check_voted_wrong_method,
                routes::check_voted_path_wrong_method,
            ],
        )
        .register(
            "/",
            catchers![
                catchers::bad_request,
                catchers::not_found,
                catchers::method_not_allowed,
                catchers::unprocessable_entity,
                catchers::internal_error,
            ],
        ))
}
