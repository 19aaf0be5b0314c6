//! Render Option Validation - Rule/Policy Separation
//!
//! Rules produce structured violations.
//! The validator turns any violation into a terminal `InvalidRenderOptions`.

use serde::{Deserialize, Serialize};

use crate::error::CodeError;
use crate::render::{bar_height, usable_width, RenderOptions};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleViolation {
    pub rule: String,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl RuleViolation {
    fn describe(&self) -> String {
        let mut out = format!("{}: {}", self.rule, self.message);
        match (&self.expected, &self.actual) {
            (Some(expected), Some(actual)) => {
                out.push_str(&format!(" (expected {}, got {})", expected, actual));
            }
            (Some(expected), None) => out.push_str(&format!(" (expected {})", expected)),
            (None, Some(actual)) => out.push_str(&format!(" (got {})", actual)),
            (None, None) => {}
        }
        out
    }
}

/// Validation rule trait - produces violations
pub trait OptionsRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, options: &RenderOptions, modules: usize) -> Vec<RuleViolation>;
}

// --- Concrete Rules ---

pub struct DimensionRule;

impl OptionsRule for DimensionRule {
    fn name(&self) -> &'static str { "dimension" }

    fn check(&self, options: &RenderOptions, _modules: usize) -> Vec<RuleViolation> {
        let fields = [
            ("width", options.width, true),
            ("height", options.height, true),
            ("margin", options.margin, false),
            ("font_size", options.font_size, false),
        ];

        fields
            .iter()
            .filter(|(_, value, positive)| {
                !value.is_finite() || *value < 0.0 || (*positive && *value == 0.0)
            })
            .map(|(field, value, positive)| RuleViolation {
                rule: self.name().to_string(),
                message: format!("Invalid {}", field),
                expected: Some(if *positive { "finite number > 0" } else { "finite number >= 0" }.to_string()),
                actual: Some(format!("{}", value)),
            })
            .collect()
    }
}

pub struct ModuleWidthRule;

impl OptionsRule for ModuleWidthRule {
    fn name(&self) -> &'static str { "module_width" }

    fn check(&self, options: &RenderOptions, modules: usize) -> Vec<RuleViolation> {
        if modules == 0 {
            return vec![RuleViolation {
                rule: self.name().to_string(),
                message: "Pattern has no modules".to_string(),
                expected: Some("at least 1 module".to_string()),
                actual: Some("0".to_string()),
            }];
        }

        let usable = usable_width(options);
        if usable <= 0.0 {
            vec![RuleViolation {
                rule: self.name().to_string(),
                message: "Margins leave no room for bars".to_string(),
                expected: Some(format!("width > 2 x margin ({})", 2.0 * options.margin)),
                actual: Some(format!("width {}", options.width)),
            }]
        } else {
            vec![]
        }
    }
}

pub struct BarHeightRule;

impl OptionsRule for BarHeightRule {
    fn name(&self) -> &'static str { "bar_height" }

    fn check(&self, options: &RenderOptions, _modules: usize) -> Vec<RuleViolation> {
        let height = bar_height(options);
        if height <= 0.0 {
            vec![RuleViolation {
                rule: self.name().to_string(),
                message: "Height leaves no room for bars".to_string(),
                expected: Some("positive bar height".to_string()),
                actual: Some(format!("{}", height)),
            }]
        } else {
            vec![]
        }
    }
}

pub struct FontSizeRule;

impl OptionsRule for FontSizeRule {
    fn name(&self) -> &'static str { "font_size" }

    fn check(&self, options: &RenderOptions, _modules: usize) -> Vec<RuleViolation> {
        if options.display_value && options.font_size == 0.0 {
            vec![RuleViolation {
                rule: self.name().to_string(),
                message: "Text is displayed with a zero font size".to_string(),
                expected: Some("font_size > 0".to_string()),
                actual: Some("0".to_string()),
            }]
        } else {
            vec![]
        }
    }
}

pub struct ColorRule;

impl OptionsRule for ColorRule {
    fn name(&self) -> &'static str { "color" }

    fn check(&self, options: &RenderOptions, _modules: usize) -> Vec<RuleViolation> {
        let mut violations = vec![];

        if !is_transparent(&options.background_color) && !is_hex_color(&options.background_color) {
            violations.push(self.violation("background", &options.background_color));
        }
        if !is_hex_color(&options.line_color) {
            violations.push(self.violation("line_color", &options.line_color));
        }

        violations
    }
}

impl ColorRule {
    fn violation(&self, field: &str, value: &str) -> RuleViolation {
        RuleViolation {
            rule: self.name().to_string(),
            message: format!("Invalid {}", field),
            expected: Some("#rgb or #rrggbb".to_string()),
            actual: Some(format!("{:?}", value)),
        }
    }
}

pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

pub fn is_transparent(value: &str) -> bool {
    value.eq_ignore_ascii_case("transparent") || value.eq_ignore_ascii_case("none")
}

/// Validator runs every rule and rejects on any violation
pub struct OptionsValidator {
    rules: Vec<Box<dyn OptionsRule>>,
}

impl OptionsValidator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(DimensionRule),
                Box::new(ModuleWidthRule),
                Box::new(BarHeightRule),
                Box::new(FontSizeRule),
                Box::new(ColorRule),
            ],
        }
    }

    pub fn violations(&self, options: &RenderOptions, modules: usize) -> Vec<RuleViolation> {
        self.rules
            .iter()
            .flat_map(|rule| rule.check(options, modules))
            .collect()
    }

    pub fn validate(&self, options: &RenderOptions, modules: usize) -> Result<(), CodeError> {
        let violations = self.violations(options, modules);
        if violations.is_empty() {
            return Ok(());
        }

        let messages: Vec<_> = violations.iter().map(RuleViolation::describe).collect();
        Err(CodeError::InvalidRenderOptions(messages.join("; ")))
    }
}

impl Default for OptionsValidator {
    fn default() -> Self {
        Self::new()
    }
}
