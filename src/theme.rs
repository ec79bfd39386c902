use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;

const USER_THEME_APP_DIR: &str = "grid-snake";

/// Colors for everything the renderer paints.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub snake: Color,
    pub food: Color,
    pub text: Color,
    pub background: Color,
}

/// The default theme id selected at startup.
pub const DEFAULT_THEME_ID: &str = "default";

fn theme_default() -> Theme {
    Theme {
        snake: Color::Green,
        food: Color::Red,
        text: Color::Black,
        background: Color::White,
    }
}

fn theme_dark() -> Theme {
    Theme {
        snake: Color::LightGreen,
        food: Color::LightRed,
        text: Color::White,
        background: Color::Black,
    }
}

/// One selectable theme with its id.
#[derive(Debug, Clone)]
pub struct ThemeItem {
    pub id: String,
    pub theme: Theme,
}

/// Built-in themes plus user themes, selectable by id.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<ThemeItem>,
    selected: usize,
}

impl ThemeCatalog {
    /// Loads the built-in themes and overlays user themes from the
    /// config directory. User files override built-ins with the same id.
    #[must_use]
    pub fn load() -> Self {
        let mut catalog = Self::builtin();
        if let Some(dir) = user_theme_dir() {
            catalog.merge_theme_dir(&dir);
        }
        catalog
    }

    /// Returns only the built-in themes.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            themes: vec![
                ThemeItem {
                    id: DEFAULT_THEME_ID.to_owned(),
                    theme: theme_default(),
                },
                ThemeItem {
                    id: "dark".to_owned(),
                    theme: theme_dark(),
                },
            ],
            selected: 0,
        }
    }

    /// Returns the currently selected theme.
    #[must_use]
    pub fn current(&self) -> &Theme {
        &self.themes[self.selected].theme
    }

    /// Returns the id of the currently selected theme.
    #[must_use]
    pub fn current_id(&self) -> &str {
        &self.themes[self.selected].id
    }

    /// Selects a theme by id. Unknown ids leave the selection unchanged.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        if let Some(idx) = self.themes.iter().position(|item| item.id == id) {
            self.selected = idx;
            return true;
        }

        false
    }

    /// Advances the selection to the next theme in catalog order.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.themes.len();
    }

    /// Returns all selectable theme ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|item| item.id.as_str())
    }

    fn insert(&mut self, id: String, theme: Theme) {
        if let Some(existing) = self.themes.iter_mut().find(|item| item.id == id) {
            existing.theme = theme;
        } else {
            self.themes.push(ThemeItem { id, theme });
        }
    }

    fn merge_theme_dir(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return,
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_json_file(path))
            .collect();
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for path in paths {
            let Some(id) = path
                .file_stem()
                .and_then(|name| name.to_str())
                .map(str::to_owned)
            else {
                continue;
            };

            let raw = match fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(error) => {
                    eprintln!("Warning: failed to read theme file {}: {error}", path.display());
                    continue;
                }
            };

            match parse_theme(&raw) {
                Ok(theme) => self.insert(id, theme),
                Err(error) => {
                    eprintln!(
                        "Warning: invalid theme file {}; skipping: {error}",
                        path.display()
                    );
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    theme: HashMap<String, String>,
}

/// Parses a user theme file. Missing or unparseable colors fall back to
/// the default theme's value for that slot.
fn parse_theme(raw: &str) -> Result<Theme, serde_json::Error> {
    let parsed = serde_json::from_str::<ThemeFile>(raw)?;
    let fallback = theme_default();

    let resolve = |token: &str, fallback: Color| {
        parsed
            .theme
            .get(token)
            .and_then(|value| parse_color(value))
            .unwrap_or(fallback)
    };

    Ok(Theme {
        snake: resolve("snake", fallback.snake),
        food: resolve("food", fallback.food),
        text: resolve("text", fallback.text),
        background: resolve("background", fallback.background),
    })
}

fn parse_color(value: &str) -> Option<Color> {
    if let Some(color) = parse_hex_color(value) {
        return Some(color);
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        _ => None,
    }
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(red, green, blue))
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn user_theme_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|config_dir| config_dir.join(USER_THEME_APP_DIR).join("themes"))
}
