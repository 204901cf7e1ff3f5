//! `studymate init` — write a starter config file.

use studymate_config::AppConfig;

pub async fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dir = AppConfig::config_dir();
    let path = dir.join("config.toml");

    if path.exists() && !force {
        println!(
            "Config already exists at {} — use --force to overwrite",
            path.display()
        );
        return Ok(());
    }

    std::fs::create_dir_all(&dir)?;
    std::fs::write(&path, AppConfig::default_toml())?;
    println!("Wrote {}", path.display());

    Ok(())
}
