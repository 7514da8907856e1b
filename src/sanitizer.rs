use ammonia::Builder;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Allow-list HTML sanitizer
///
/// Uploaded documents and translated responses are both untrusted input that
/// ends up inside the rendered page, so everything passes through here before
/// display. The allow-list is the whole policy: `b`, `i`, `u`, `span` and
/// `hr` survive, `style` survives on `span` only, and everything else is
/// stripped or escaped. `<script>`/`<style>` elements are removed together
/// with their contents.
/// Tags that survive sanitization
const ALLOWED_TAGS: [&str; 5] = ["b", "i", "u", "span", "hr"];

static SANITIZER: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::default();

    let mut span_attributes = HashSet::new();
    span_attributes.insert("style");

    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("span", span_attributes);

    builder
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .generic_attributes(HashSet::new())
        .tag_attributes(tag_attributes);

    builder
});

/// Sanitize a content string down to the allow-listed markup subset
///
/// Pure transform, idempotent: sanitizing already-sanitized content is a
/// no-op.
pub fn sanitize(content: &str) -> String {
    SANITIZER.clean(content).to_string()
}
