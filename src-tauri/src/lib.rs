//! Shopping Trolley Backend
//!
//! Layered architecture:
//! - domain: Shopping list entities and rules
//! - repository: List access abstraction and in-memory implementation
//! - commands: Tauri command handlers
//! - config: Optional TOML configuration

use std::path::PathBuf;
use std::sync::Arc;

use tauri::Manager;

mod commands;
mod config;
mod domain;
mod repository;

use config::AppConfig;
use repository::{MemoryShoppingListRepository, ShoppingListRepository};

/// Application state shared across commands
pub struct AppState {
    pub list_repo: Arc<dyn ShoppingListRepository>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let list_repo = MemoryShoppingListRepository::new(config.seed_list());
        Self {
            list_repo: Arc::new(list_repo),
            config,
        }
    }
}

/// Load config from the app config dir; a broken file falls back to defaults
fn load_config(config_dir: Option<PathBuf>) -> (AppConfig, Option<String>) {
    let Some(dir) = config_dir else {
        return (AppConfig::default(), None);
    };
    match AppConfig::load(&dir) {
        Ok(config) => (config, None),
        Err(e) => (
            AppConfig::default(),
            Some(format!("{} ({}), using defaults", e, dir.join(config::CONFIG_FILE_NAME).display())),
        ),
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            let (config, config_warning) = load_config(app_handle.path().app_config_dir().ok());

            // Initialize logging; the handle lives as long as the app
            match app_handle.path().app_log_dir() {
                Ok(log_dir) => {
                    match rolling_logger::init_logger(&log_dir, "ShoppingTrolley", (&config.logging).into()) {
                        Ok(logger) => {
                            app.manage(logger);
                        }
                        Err(e) => {
                            eprintln!("[{}] Logger init failed: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
                        }
                    }
                }
                Err(e) => {
                    eprintln!("[{}] No log dir: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
                }
            }

            if let Some(warning) = config_warning {
                tracing::warn!("{}", warning);
            }
            tracing::info!(
                title = %config.title,
                items = config.seed_items.len(),
                "App setup starting"
            );

            app.manage(AppState::new(config));
            rolling_logger::info("Shopping list ready");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_items,
            commands::increment_item,
            commands::decrement_item,
            commands::get_app_title,
            commands::serialize_list,
            commands::submit_list,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_state_seeds_from_config() {
        let config = AppConfig::parse(r#"seed_items = ["Milk", "Bread"]"#).unwrap();
        let state = AppState::new(config);

        let items = state.list_repo.list().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name(), "Milk");
    }

    #[test]
    fn test_broken_config_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(config::CONFIG_FILE_NAME), "seed_items = []").unwrap();

        let (config, warning) = load_config(Some(dir.path().to_path_buf()));
        assert_eq!(config, AppConfig::default());
        assert!(warning.unwrap().contains("seed_items must not be empty"));
    }

    #[test]
    fn test_no_config_dir() {
        let (config, warning) = load_config(None);
        assert_eq!(config, AppConfig::default());
        assert!(warning.is_none());
    }
}
