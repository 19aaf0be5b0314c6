//! Pattern Rendering - Bar Pattern to Self-Contained SVG
//!
//! Output depends only on (pattern, text, options), so identical inputs give
//! byte-identical documents. No stylesheet, no external font.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::encoding::BarPattern;
use crate::error::CodeError;
use crate::validation::{is_transparent, OptionsValidator};

/// Gap between the bars and the human-readable text
pub const TEXT_GAP: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    #[serde(alias = "displayValue")]
    pub display_value: bool,
    #[serde(alias = "fontSize")]
    pub font_size: f64,
    #[serde(rename = "background")]
    pub background_color: String,
    #[serde(alias = "lineColor")]
    pub line_color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 80.0,
            margin: 10.0,
            display_value: true,
            font_size: 14.0,
            background_color: "#ffffff".to_string(),
            line_color: "#000000".to_string(),
        }
    }
}

/// Horizontal room left for bars once both margins are taken
pub(crate) fn usable_width(options: &RenderOptions) -> f64 {
    options.width - 2.0 * options.margin
}

pub(crate) fn bar_height(options: &RenderOptions) -> f64 {
    if options.display_value {
        options.height - options.margin - options.font_size - TEXT_GAP
    } else {
        options.height - 2.0 * options.margin
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedImage {
    pub svg: String,
    pub width: f64,
    pub height: f64,
}

impl RenderedImage {
    pub fn base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.svg.as_bytes())
    }

    pub fn data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", self.base64())
    }
}

/// Draw `pattern` with `text` centered beneath it when `display_value` is set
pub fn render(
    pattern: &BarPattern,
    text: &str,
    options: &RenderOptions,
) -> Result<RenderedImage, CodeError> {
    OptionsValidator::new().validate(options, pattern.len())?;

    let module_width = usable_width(options) / pattern.len() as f64;
    let margin = options.margin;
    let bars = bar_height(options);

    // the background lives on the root; bars and text are the only children
    let background = if is_transparent(&options.background_color) {
        String::new()
    } else {
        format!(r#" style="background-color:{}""#, options.background_color)
    };
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"{background}>"#,
        w = fmt_num(options.width),
        h = fmt_num(options.height),
        background = background,
    );

    for (i, _) in pattern.modules().iter().enumerate().filter(|(_, ink)| **ink) {
        svg.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt_num(margin + i as f64 * module_width),
            fmt_num(margin),
            fmt_num(module_width),
            fmt_num(bars),
            options.line_color
        ));
    }

    if options.display_value {
        let baseline = margin + bars + TEXT_GAP + options.font_size;
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" font-family="monospace" font-size="{}" fill="{}">{}</text>"#,
            fmt_num(options.width / 2.0),
            fmt_num(baseline),
            fmt_num(options.font_size),
            options.line_color,
            escape_xml(text)
        ));
    }

    svg.push_str("</svg>");

    Ok(RenderedImage {
        svg,
        width: options.width,
        height: options.height,
    })
}

/// At most 4 decimals, trailing zeros trimmed
fn fmt_num(value: f64) -> String {
    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
