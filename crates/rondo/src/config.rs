use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use roundel::{Layout, LayoutError, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notes::DEFAULT_OCTAVE;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1080.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WheelConfig {
    pub sectors: usize,
    /// Radius bounds of the pressable band, as fractions of the display
    /// radius.
    pub inner_ratio: f64,
    pub outer_ratio: f64,
    pub top_angle: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            sectors: 12,
            inner_ratio: 0.55,
            outer_ratio: 0.95,
            top_angle: roundel::DEFAULT_TOP_ANGLE,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MidiConfig {
    pub channel: u8,
    pub velocity: u8,
    pub octave: u8,
}

impl Default for MidiConfig {
    fn default() -> Self {
        Self {
            channel: 0,
            velocity: 100,
            octave: DEFAULT_OCTAVE,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub wheel: WheelConfig,
    pub midi: MidiConfig,
}

impl Config {
    pub fn center(&self) -> Point {
        Point::new(self.display.width / 2.0, self.display.height / 2.0)
    }

    pub fn display_radius(&self) -> f64 {
        self.display.width.min(self.display.height) / 2.0
    }

    pub fn inner_radius(&self) -> f64 {
        self.display_radius() * self.wheel.inner_ratio
    }

    pub fn outer_radius(&self) -> f64 {
        self.display_radius() * self.wheel.outer_ratio
    }

    /// Build the sector layout this configuration describes. Degenerate
    /// values (zero sectors, inverted radii) are rejected here, at build
    /// time, never silently laid out.
    pub fn build_layout(&self) -> Result<Layout, LayoutError> {
        Layout::build(
            self.wheel.sectors,
            self.center(),
            self.inner_radius(),
            self.outer_radius(),
            self.wheel.top_angle,
        )
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "rondo", "rondo").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("RONDO").separator("__"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default configuration: {e}");
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

/// Watch the config file and emit a reload event whenever it changes, so a
/// running daemon picks up wheel or MIDI changes without a restart.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {e}");
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {e}");
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {e}");
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_a_playable_wheel() {
        let cfg = Config::default();
        assert_eq!(cfg.wheel.sectors, 12);
        assert!(cfg.inner_radius() < cfg.outer_radius());
        assert_eq!(cfg.center(), Point::new(540.0, 540.0));

        let layout = cfg.build_layout().unwrap();
        assert_eq!(layout.sector_count(), 12);
    }

    #[test]
    fn embedded_default_file_matches_the_builtin_defaults() {
        let parsed: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let builtin = Config::default();
        assert_eq!(parsed.wheel.sectors, builtin.wheel.sectors);
        assert_eq!(parsed.wheel.top_angle, builtin.wheel.top_angle);
        assert_eq!(parsed.midi.velocity, builtin.midi.velocity);
        assert_eq!(parsed.display.width, builtin.display.width);
    }

    #[test]
    fn partial_files_fall_back_per_field() {
        let parsed: Config = config::Config::builder()
            .add_source(config::File::from_str(
                "[wheel]\nsectors = 8\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(parsed.wheel.sectors, 8);
        assert_eq!(parsed.wheel.top_angle, roundel::DEFAULT_TOP_ANGLE);
        assert_eq!(parsed.midi.octave, DEFAULT_OCTAVE);
    }

    #[test]
    fn degenerate_wheel_is_rejected_at_layout_build() {
        let mut cfg = Config::default();
        cfg.wheel.sectors = 0;
        assert!(cfg.build_layout().is_err());

        let mut cfg = Config::default();
        cfg.wheel.inner_ratio = 1.2;
        assert!(cfg.build_layout().is_err());
    }
}
