use std::fmt;

/// Game modes the automation rotation cycles through.
pub const GAME_MODES: [&str; 4] = ["4E", "4S", "3E", "3S"];

/// Immutable application settings, passed to whoever needs them instead of
/// living as module globals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub website: &'static str,
    pub model_folder: &'static str,
    pub browser_data_folder: &'static str,
    pub res_folder: &'static str,
    pub log_folder: &'static str,
    pub mitm_conf_folder: &'static str,
    pub temp_folder: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            website: "https://mjcopilot.com",
            model_folder: "models",
            browser_data_folder: "browser_data",
            res_folder: "resources",
            log_folder: "log",
            mitm_conf_folder: "mitm_config",
            temp_folder: "temp",
        }
    }
}

impl AppConfig {
    /// Folders the application expects to exist next to the executable.
    pub fn folders(&self) -> [&'static str; 6] {
        [
            self.model_folder,
            self.browser_data_folder,
            self.res_folder,
            self.log_folder,
            self.mitm_conf_folder,
            self.temp_folder,
        ]
    }
}

/// Player-count variants the bots/models support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    FourPlayer,
    ThreePlayer,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::FourPlayer => "4P",
            GameMode::ThreePlayer => "3P",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the game client currently is, as far as the host can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    NotRunning,
    MainMenu,
    InGame,
    GameEnding,
}
