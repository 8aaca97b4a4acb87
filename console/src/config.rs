use tictactoe_engine::GameConfig;
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub type ConsoleConfigManager =
    ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer>;

pub fn get_config_path(override_path: Option<&str>) -> String {
    if let Some(path) = override_path {
        return path.to_string();
    }
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(config_path: &str) -> ConsoleConfigManager {
    ConfigManager::from_yaml_file(config_path)
}
