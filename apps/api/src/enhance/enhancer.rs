//! Content enhancement — pluggable, trait-based backend for `/ai-enhance`.
//!
//! Default: `TemplateEnhancer` (deterministic template substitution, no model
//! call). Template index = content length modulo template count, so
//! identical-length inputs always land on the same template. A real model
//! backend implements `Enhancer` and replaces the construction in `main`.

use async_trait::async_trait;

use crate::enhance::templates::{templates_for_section, CONTENT_MARKER};

/// The enhancement backend trait. Carried in `AppState` as `Arc<dyn Enhancer>`.
#[async_trait]
pub trait Enhancer: Send + Sync {
    /// Produces enhanced text for a section. Callers must reject empty
    /// content before calling; backends perform no validation.
    async fn enhance(&self, section: &str, content: &str) -> anyhow::Result<String>;
}

/// Template-table backend. Pure, stateless, never fails.
pub struct TemplateEnhancer;

#[async_trait]
impl Enhancer for TemplateEnhancer {
    async fn enhance(&self, section: &str, content: &str) -> anyhow::Result<String> {
        Ok(enhance_content(section, content))
    }
}

/// Deterministic template-based enhancement.
///
/// - Unrecognized section: the input is returned verbatim.
/// - Recognized section: selects `templates[chars(content) % templates.len()]`.
///   Character count, not byte count — multi-byte input must select the same
///   template as an equal-length ASCII string.
/// - If the selected template carries `{content}`, every occurrence is
///   replaced with the input; otherwise the template is returned as-is and
///   the input is discarded (the `skills` section).
pub fn enhance_content(section: &str, content: &str) -> String {
    let Some(templates) = templates_for_section(section) else {
        return content.to_string();
    };

    let index = content.chars().count() % templates.len();
    let template = templates[index];

    if template.contains(CONTENT_MARKER) {
        template.replace(CONTENT_MARKER, content)
    } else {
        template.to_string()
    }
}
