use backend::config::AppConfig;
use include_dir::{include_dir, Dir};
use rocket::{routes, fs::NamedFile};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

static PUBLIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/public");

#[rocket::get("/<path..>", rank = 10)]
async fn pages(
    path: std::path::PathBuf,
    public_dir: &rocket::State<std::path::PathBuf>,
) -> Option<NamedFile> {
    let mut file = public_dir.join(&path);
    if file.is_dir() {
        file = file.join("index.html");
    } else if !file.exists() {
        // Page routes are served extensionless: /ballot -> ballot.html
        file.set_extension("html");
    }
    NamedFile::open(file).await.ok()
}

#[rocket::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match rocket::Config::figment().extract::<AppConfig>() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid application config: {e}");
            std::process::exit(1);
        }
    };
    info!(storage = ?config.storage, "Starting voting service");

    let public_dir = std::env::temp_dir().join(format!("voting_public_{}", Uuid::new_v4()));
    if let Err(e) = std::fs::create_dir_all(&public_dir)
        .map_err(|e| e.to_string())
        .and_then(|_| PUBLIC_DIR.extract(&public_dir).map_err(|e| e.to_string()))
    {
        error!("Failed to extract static files: {e}");
        std::process::exit(1);
    }

    let rocket = match backend::build(&config) {
        Ok(rocket) => rocket,
        Err(e) => {
            error!("Failed to open the data store: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = rocket
        .manage(public_dir)
        .mount("/", routes![pages])
        .launch()
        .await
    {
        error!("Server failed to launch: {e}");
        std::process::exit(1);
    }
}
