//! Plain-text extraction from rendered license markup
//!
//! The markup is parsed as an HTML5 document and the single `<article>`
//! element is located by walking the tree. Its descendant text nodes are
//! concatenated in document order; the parser has already decoded character
//! entities, so `&amp;` in the markup comes out as `&`.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::generation::{GenerationError, LicenseText};

/// Element wrapping the license body in every template
pub const WRAPPER_TAG: &str = "article";

/// Extract the license body from rendered markup
pub fn extract(markup: &str) -> Result<LicenseText, GenerationError> {
    let dom = parse_document(RcDom::default(), Default::default()).one(markup);

    let mut wrappers = Vec::new();
    find_elements(&dom.document, WRAPPER_TAG, &mut wrappers);

    let wrapper = match wrappers.as_slice() {
        [single] => single,
        [] => {
            return Err(GenerationError::malformed(format!(
                "no <{WRAPPER_TAG}> element found"
            )));
        }
        many => {
            return Err(GenerationError::malformed(format!(
                "expected one <{WRAPPER_TAG}> element, found {}",
                many.len()
            )));
        }
    };

    let mut text = String::new();
    collect_text(wrapper, &mut text);

    tracing::debug!(bytes = text.len(), "Extracted license body");

    Ok(LicenseText::new(text.trim()))
}

fn find_elements(node: &Handle, tag: &str, found: &mut Vec<Handle>) {
    if let NodeData::Element { name, .. } = &node.data {
        if &*name.local == tag {
            found.push(node.clone());
        }
    }
    for child in node.children.borrow().iter() {
        find_elements(child, tag, found);
    }
}

fn collect_text(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text(child, out),
            _ => {}
        }
    }
}
