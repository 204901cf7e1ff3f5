//! `studymate status` — show the effective configuration.

use studymate_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    println!("📚 StudyMate Status");
    println!("==================");
    println!("  Config dir:  {}", AppConfig::config_dir().display());
    println!("  Gateway:     {}:{}", config.gateway.host, config.gateway.port);
    println!("  Public bind: {}", config.gateway.allow_public_bind);
    println!("  Body limit:  {} bytes", config.gateway.max_body_bytes);
    if config.gateway.allowed_origins.is_empty() {
        println!("  CORS:        same-origin only");
    } else {
        println!("  CORS:        {}", config.gateway.allowed_origins.join(", "));
    }

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — run `studymate init` first");
    }

    Ok(())
}
