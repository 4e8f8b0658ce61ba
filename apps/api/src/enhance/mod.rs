// Enhancement engine: section-aware template rewriting behind a pluggable
// Enhancer trait. No live model calls; see enhancer::TemplateEnhancer.

pub mod enhancer;
pub mod handlers;
pub mod templates;
