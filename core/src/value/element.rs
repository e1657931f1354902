use crate::error::*;

/// Node of an XML document: a named element with attributes, text content
/// and child elements.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub const OPTION_ATTRIBUTE: &'static str = "option";
    pub const NONE: &'static str = "none";
    pub const SOME: &'static str = "some";
    /// Child holding the content of an option marked `option="some"`.
    pub const SOME_CONTENT: &'static str = "value";
    pub const SIZE_ATTRIBUTE: &'static str = "size";
    pub const DYNAMIC: &'static str = "dynamic";

    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Name given to the `index`-th unnamed item of a sequence, tuple or map.
    pub fn item_name(index: usize) -> String {
        format!("value{}", index)
    }

    pub fn none(name: impl ToString) -> Self {
        Self::new(name).attribute(Self::OPTION_ATTRIBUTE, Self::NONE)
    }

    /// Wraps `content` into an explicitly present option, needed when
    /// `content` is itself an option.
    pub fn some(name: impl ToString, content: Element) -> Self {
        Self::new(name)
            .attribute(Self::OPTION_ATTRIBUTE, Self::SOME)
            .child(content.rename(Self::SOME_CONTENT))
    }

    pub fn text(mut self, value: impl ToString) -> Self {
        self.text = value.to_string();
        self
    }

    pub fn attribute(mut self, name: impl ToString, value: impl ToString) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(element);
        self
    }

    pub fn rename(mut self, name: impl ToString) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn is_none(&self) -> bool {
        self.get_attribute(Self::OPTION_ATTRIBUTE) == Some(Self::NONE)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

pub(crate) fn escape(value: &str, attribute: bool) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if attribute => result.push_str("&quot;"),
            '\'' if attribute => result.push_str("&apos;"),
            c => result.push(c),
        }
    }
    result
}

/// Checks `name` against the XML `NCName` production, the names this crate
/// writes for elements and attributes. Colons are rejected since no namespaces
/// are declared.
pub fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(is_name_start_char) && chars.all(is_name_char);
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidName(name.to_owned()))
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}'
    )
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b && c > d", false), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape(r#"say "hi""#, false), r#"say "hi""#);
        assert_eq!(escape(r#"say "hi""#, true), "say &quot;hi&quot;");
    }

    #[test]
    fn test_validate_name() {
        for name in ["value0", "_x", "größe", "höhe.mm", "位置", "a-b"] {
            assert!(validate_name(name).is_ok(), "{}", name);
        }
        for name in ["", "world position", "0x", "-a", "a:b", "a<b", ".x"] {
            match validate_name(name) {
                Err(Error::InvalidName(invalid)) => assert_eq!(invalid, name),
                result => panic!("{:?} accepted: {:?}", name, result),
            }
        }
    }

    #[test]
    fn test_builder() {
        let element = Element::new("value0")
            .attribute(Element::SIZE_ATTRIBUTE, Element::DYNAMIC)
            .child(Element::new("value0").text(1))
            .child(Element::none("value1"));
        assert_eq!(element.get_attribute("size"), Some("dynamic"));
        assert_eq!(element.get_child("value0").unwrap().text, "1");
        assert!(element.get_child("value1").unwrap().is_none());
        assert!(!element.is_leaf());
    }
}
