use serde::Serialize;

/// The handful of elements the search page builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Ul,
    Li,
    H4,
    A,
    P,
    Small,
    Strong,
    Span,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::H4 => "h4",
            Tag::A => "a",
            Tag::P => "p",
            Tag::Small => "small",
            Tag::Strong => "strong",
            Tag::Span => "span",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Text { text: String },
    Element(Element),
}

/// Element tree that only ever receives text through text nodes, so content
/// can never be parsed as markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: Tag,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Element {
        Element {
            tag,
            attributes: vec![],
            children: vec![],
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Element {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_display(&mut self, display: &str) {
        self.set_attribute("style", &format!("display: {display}"));
    }

    pub fn is_hidden(&self) -> bool {
        self.attribute("style") == Some("display: none")
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Replaces all children with a single text node; empty text leaves no node.
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.append_text(text);
    }

    pub fn append_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.children.push(Node::Text {
                text: text.to_string(),
            });
        }
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text { text } => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag.name());
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, out);
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Text { text } => escape_into(text, out),
                Node::Element(element) => element.write_html(out),
            }
        }
        out.push_str("</");
        out.push_str(self.tag.name());
        out.push('>');
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::page::{Element, Node, Tag};

    #[test]
    fn text_is_escaped_when_serialized() {
        let mut small = Element::new(Tag::Small);
        small.append_text("<img src=x onerror=\"alert('x')\"> & more");
        assert_eq!(
            small.to_html(),
            "<small>&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt; &amp; more</small>"
        );
    }

    #[test]
    fn attributes_are_escaped_and_replaced() {
        let mut link = Element::new(Tag::A).with_attribute("href", "/a?b=\"c\"");
        assert_eq!(link.to_html(), "<a href=\"/a?b=&quot;c&quot;\"></a>");

        link.set_attribute("href", "/docs/");
        assert_eq!(link.attribute("href"), Some("/docs/"));
        assert_eq!(link.attributes.len(), 1);
    }

    #[test]
    fn nested_text_content() {
        let mut strong = Element::new(Tag::Strong);
        strong.append_text("Spring");
        let mut small = Element::new(Tag::Small);
        small.append_text("the ");
        small.append_child(strong);
        small.append_text(" Framework");

        assert_eq!(small.text_content(), "the Spring Framework");
        assert_eq!(small.to_html(), "<small>the <strong>Spring</strong> Framework</small>");
    }

    #[test]
    fn set_text_replaces_children() {
        let mut span = Element::new(Tag::Span);
        span.append_child(Element::new(Tag::Strong));
        span.set_text("log4j");
        assert_eq!(span.children, vec![Node::Text { text: "log4j".to_string() }]);

        span.set_text("");
        assert!(span.children.is_empty());
    }

    #[test]
    fn display_toggles() {
        let mut list = Element::new(Tag::Ul);
        assert!(!list.is_hidden());
        list.set_display("none");
        assert!(list.is_hidden());
        list.set_display("block");
        assert!(!list.is_hidden());
    }
}
