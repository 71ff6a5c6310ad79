//! Landing page configuration.
//!
//! Every breakpoint, pixel margin, delay and literal the page behaviors read
//! lives here. A JSON document only needs to name the fields it overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub breakpoints: Breakpoints,
    pub margins: Margins,
    pub timings: Timings,
    pub accordion: AccordionConfig,
    pub cta: CtaConfig,
    pub forms: FormsConfig,
}

/// Viewport widths in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Breakpoints {
    /// At or below this width the navigation collapses behind the toggle.
    pub nav_collapse_max: f64,
    /// At or above this width the table of contents is scroll-driven.
    pub desktop_min: f64,
    pub mobile_toc_max: f64,
    pub cta_compact_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            nav_collapse_max: 992.0,
            desktop_min: 993.0,
            mobile_toc_max: 768.0,
            cta_compact_max: 480.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margins {
    /// How early a section becomes current, measured above its top.
    pub toc_trigger: f64,
    /// Gap left between the fixed header and a scroll target.
    pub header_gap: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            toc_trigger: 100.0,
            header_gap: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Timings {
    pub accordion_scroll_ms: u32,
    pub auto_open_ms: u32,
    pub auto_open_scroll_ms: u32,
    pub hero_rotate_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            accordion_scroll_ms: 300,
            auto_open_ms: 500,
            auto_open_scroll_ms: 100,
            hero_rotate_ms: 5_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccordionConfig {
    pub auto_open_hash: String,
    pub expand_label: String,
    pub collapse_label: String,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            auto_open_hash: "#nuclear-power".to_owned(),
            expand_label: "Show Less".to_owned(),
            collapse_label: "Read More".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CtaPolicy {
    /// Visible once the scroll offset is strictly past `threshold`.
    Threshold { threshold: f64 },
    /// Narrow viewports only: hide on downward scroll, show on upward scroll.
    Direction { min_delta: f64 },
}

impl Default for CtaPolicy {
    fn default() -> Self {
        CtaPolicy::Threshold { threshold: 500.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CtaConfig {
    pub button_id: String,
    pub policy: CtaPolicy,
}

impl Default for CtaConfig {
    fn default() -> Self {
        Self {
            button_id: "openGoogleFormSidebar".to_owned(),
            policy: CtaPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormsConfig {
    pub url: String,
    pub button_ids: Vec<String>,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            url: "https://forms.gle/63FyUTMUnLJHX1UZ9".to_owned(),
            button_ids: vec![
                "openGoogleFormHero".to_owned(),
                "openGoogleFormContact".to_owned(),
                "openGoogleFormSidebar".to_owned(),
            ],
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let bp = &self.breakpoints;
        if bp.desktop_min <= bp.nav_collapse_max {
            return Err(invalid(
                "breakpoints.desktop_min",
                format!(
                    "{} must be greater than nav_collapse_max ({})",
                    bp.desktop_min, bp.nav_collapse_max
                ),
            ));
        }
        if bp.cta_compact_max >= bp.nav_collapse_max {
            return Err(invalid(
                "breakpoints.cta_compact_max",
                format!(
                    "{} must be smaller than nav_collapse_max ({})",
                    bp.cta_compact_max, bp.nav_collapse_max
                ),
            ));
        }
        if self.timings.hero_rotate_ms == 0 {
            return Err(invalid("timings.hero_rotate_ms", "must be non-zero".to_owned()));
        }
        if let CtaPolicy::Direction { min_delta } = self.cta.policy {
            if min_delta <= 0.0 {
                return Err(invalid("cta.policy.min_delta", "must be positive".to_owned()));
            }
        }
        if !self.accordion.auto_open_hash.starts_with('#') || self.accordion.auto_open_hash.len() < 2 {
            return Err(invalid(
                "accordion.auto_open_hash",
                format!("`{}` is not a fragment identifier", self.accordion.auto_open_hash),
            ));
        }
        if !(self.forms.url.starts_with("https://") || self.forms.url.starts_with("http://")) {
            return Err(invalid(
                "forms.url",
                format!("`{}` is not an http(s) URL", self.forms.url),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
