//! Render configuration.
//!
//! Only rendering concerns are configurable here. The scene's geometric constants live in
//! [`crate::LayoutParams::BANK_LOCKER`] and are not read from config.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::{
    core::{Canvas, Fps, Rgba8},
    error::{BankLockerError, BankLockerResult},
};

/// Typesetting used for math labels (the `r` under the brace).
///
/// Passed explicitly to the renderer through [`RenderConfig`]; nothing reads it from global state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTemplate {
    /// Italic serif, the classic look of typeset math.
    #[default]
    Simple,
    /// Same face as plain captions: upright sans-serif.
    Plain,
}

impl TextTemplate {
    /// SVG `font-family` list for math labels.
    pub fn math_font_family(self) -> &'static str {
        match self {
            Self::Simple => "'Latin Modern Math', 'CMU Serif', 'DejaVu Serif', serif",
            Self::Plain => PLAIN_FONT_FAMILY,
        }
    }

    /// SVG `font-style` for math labels.
    pub fn math_font_style(self) -> &'static str {
        match self {
            Self::Simple => "italic",
            Self::Plain => "normal",
        }
    }
}

/// SVG `font-family` list for plain captions.
pub const PLAIN_FONT_FAMILY: &str = "'DejaVu Sans', 'Liberation Sans', Arial, sans-serif";

/// Output settings for rendering the scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Background fill, straight RGBA8.
    pub background_rgba: [u8; 4],
    /// Typesetting for math labels.
    pub text_template: TextTemplate,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1280,
                height: 720,
            },
            fps: Fps { num: 30, den: 1 },
            background_rgba: Rgba8::BLACK.to_array(),
            text_template: TextTemplate::Simple,
        }
    }
}

impl RenderConfig {
    /// Load a config from a JSON file; absent fields take their defaults.
    pub fn from_json_path(path: &Path) -> BankLockerResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| BankLockerError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check canvas and frame-rate bounds.
    pub fn validate(&self) -> BankLockerResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(BankLockerError::validation("canvas width/height must be > 0"));
        }
        if self.canvas.width > u32::from(u16::MAX) || self.canvas.height > u32::from(u16::MAX) {
            return Err(BankLockerError::validation(format!(
                "canvas {}x{} exceeds {}x{}",
                self.canvas.width,
                self.canvas.height,
                u16::MAX,
                u16::MAX
            )));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        Ok(())
    }

    /// Background as a color value.
    pub fn background(&self) -> Rgba8 {
        Rgba8::from_array(self.background_rgba)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
