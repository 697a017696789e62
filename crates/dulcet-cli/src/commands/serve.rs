//! Server command implementation

use std::path::Path;

use anyhow::Result;
use dulcet_core::ModelCache;
use dulcet_server::ServerConfig;

use super::open_db;

pub async fn cmd_serve(db_path: &Path, model_dir: &Path, host: &str, port: u16) -> Result<()> {
    println!("Starting Dulcet web server...");
    println!("   Database:  {}", db_path.display());
    println!("   Models:    {}", model_dir.display());
    println!("   Listening: http://{}:{}", host, port);

    // Allowed CORS origins (comma-separated)
    let allowed_origins: Vec<String> = std::env::var("DULCET_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if !allowed_origins.is_empty() {
        println!(
            "   CORS origins: {} (DULCET_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }

    let db = open_db(db_path)?;
    let models = ModelCache::new(model_dir);
    let config = ServerConfig { allowed_origins };

    dulcet_server::serve(db, models, host, port, config).await
}
