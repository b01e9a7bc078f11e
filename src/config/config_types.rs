// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

use crate::draw::Color;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool, // size to the monitor instead of width x height
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("ladderline"),
            width: 1024,
            height: 768,
            fullscreen: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub background: Color,
    pub stroke: Color,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: Color::new(0x21, 0x21, 0x21),
            stroke: Color::new(0x19, 0x76, 0xd2),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
        }
    }
}
