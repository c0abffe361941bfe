//! # Template Renderer
//!
//! Embedded templates mark substitution points with named placeholders of the
//! form `@{slot}`. Rendering replaces every placeholder with the value bound to
//! its slot in a [`TemplateVars`] map. A placeholder whose slot has no value is
//! an error, so a template can never be written half-filled.
//!
//! The `@{…}` form leaves Go template actions (`{{ .User.Name }}`), CSS at-rules
//! and Makefile variables (`$(BINARY_NAME)`) untouched.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use napp_core::{NappError, NappResult};
use regex::Regex;

/// Slot name → substituted value
pub type TemplateVars = BTreeMap<&'static str, String>;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\{([a-z_]+)\}").expect("placeholder pattern is valid"));

// ============================================================================
// Template
// ============================================================================

/// A template body paired with the name used in error messages.
#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    name: &'a str,
    body: &'a str,
}

impl<'a> Template<'a> {
    /// Wrap a template body.
    pub fn new(name: &'a str, body: &'a str) -> Self {
        Self { name, body }
    }

    /// Template name (the output path for store entries).
    pub fn name(&self) -> &str {
        self.name
    }

    /// Every placeholder in the body, left to right, repeats included.
    pub fn placeholders(&self) -> Vec<&'a str> {
        PLACEHOLDER_RE
            .captures_iter(self.body)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// The distinct slot names the body refers to.
    pub fn slots(&self) -> BTreeSet<&'a str> {
        self.placeholders().into_iter().collect()
    }

    /// Substitute every placeholder from `vars`.
    ///
    /// # Errors
    ///
    /// Returns [`NappError::TemplateRender`] naming the first placeholder that
    /// has no value in `vars`.
    pub fn render(&self, vars: &TemplateVars) -> NappResult<String> {
        let mut out = String::with_capacity(self.body.len());
        let mut last = 0;

        for caps in PLACEHOLDER_RE.captures_iter(self.body) {
            let (Some(whole), Some(slot)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            let value = vars.get(slot.as_str()).ok_or_else(|| {
                NappError::template_render(
                    self.name,
                    format!("no value for placeholder '@{{{}}}'", slot.as_str()),
                )
            })?;

            out.push_str(&self.body[last..whole.start()]);
            out.push_str(value);
            last = whole.end();
        }

        out.push_str(&self.body[last..]);
        Ok(out)
    }
}

// ============================================================================
// Tests
// ============================================================================
