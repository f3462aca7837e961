//! Collects what a `VirtualDom` puts on screen so component tests can assert
//! on text and classes without a renderer.

use dioxus::dioxus_core::AttributeValue;
use dioxus::dioxus_core::ElementId;
use dioxus::dioxus_core::NoOpMutations;
use dioxus::dioxus_core::Template;
use dioxus::dioxus_core::TemplateAttribute;
use dioxus::dioxus_core::TemplateNode;
use dioxus::dioxus_core::WriteMutations;
use dioxus::prelude::*;

#[derive(Debug, Default)]
pub struct Rendered {
    texts: Vec<String>,
    classes: Vec<String>,
}

impl Rendered {
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.contains(needle))
    }

    /// Whether some element carries `class` as one of its class tokens.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes
            .iter()
            .any(|c| c.split_whitespace().any(|token| token == class))
    }

    fn collect(&mut self, node: &TemplateNode) {
        match node {
            TemplateNode::Element {
                attrs, children, ..
            } => {
                for attr in attrs.iter() {
                    if let TemplateAttribute::Static {
                        name: "class",
                        value,
                        ..
                    } = attr
                    {
                        self.classes.push(value.to_string());
                    }
                }
                for child in children.iter() {
                    self.collect(child);
                }
            }
            TemplateNode::Text { text } => self.texts.push(text.to_string()),
            TemplateNode::Dynamic { .. } => {}
        }
    }
}

impl WriteMutations for Rendered {
    fn append_children(&mut self, _id: ElementId, _m: usize) {}

    fn assign_node_id(&mut self, _path: &'static [u8], _id: ElementId) {}

    fn create_placeholder(&mut self, _id: ElementId) {}

    fn create_text_node(&mut self, value: &str, _id: ElementId) {
        self.texts.push(value.to_string());
    }

    fn load_template(&mut self, template: Template, index: usize, _id: ElementId) {
        if let Some(root) = template.roots.get(index) {
            self.collect(root);
        }
    }

    fn replace_node_with(&mut self, _id: ElementId, _m: usize) {}

    fn replace_placeholder_with_nodes(&mut self, _path: &'static [u8], _m: usize) {}

    fn insert_nodes_after(&mut self, _id: ElementId, _m: usize) {}

    fn insert_nodes_before(&mut self, _id: ElementId, _m: usize) {}

    fn set_attribute(
        &mut self,
        name: &'static str,
        _ns: Option<&'static str>,
        value: &AttributeValue,
        _id: ElementId,
    ) {
        if let ("class", AttributeValue::Text(class)) = (name, value) {
            self.classes.push(class.clone());
        }
    }

    fn set_node_text(&mut self, value: &str, _id: ElementId) {
        self.texts.push(value.to_string());
    }

    fn create_event_listener(&mut self, _name: &'static str, _id: ElementId) {}

    fn remove_event_listener(&mut self, _name: &'static str, _id: ElementId) {}

    fn remove_node(&mut self, _id: ElementId) {}

    fn push_root(&mut self, _id: ElementId) {}
}

/// Builds `dom` from scratch and returns everything the first render shows.
pub fn first_render(dom: &mut VirtualDom) -> Rendered {
    let mut rendered = Rendered::default();
    dom.rebuild(&mut rendered);
    rendered
}

/// Runs queued tasks and effects, re-rendering until nothing is left to do.
pub fn settle(dom: &mut VirtualDom) {
    for _ in 0..8 {
        dom.process_events();
        dom.render_immediate(&mut NoOpMutations);
    }
}
