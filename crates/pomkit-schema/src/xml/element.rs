use super::{DecodeError, EncodeError, FromElement, ToElement};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::borrow::Cow;
use std::io;

/// One XML element: qualified name, attributes, child elements and text.
///
/// Decoding borrows `raw` (the verbatim inner markup) from the source; encoding
/// borrows names and values from the model being written.
#[derive(Debug, Clone, Default)]
pub(crate) struct Element<'a> {
    name: Cow<'a, str>,
    attributes: Vec<(Cow<'a, str>, Cow<'a, str>)>,
    children: Vec<Element<'a>>,
    text: Cow<'a, str>,
    raw: Option<&'a str>,
}

/// XML `Name` production, restricted to ASCII for the punctuation rules and
/// permissive for any non-ASCII character.
pub(crate) fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let start = |c: char| c.is_ascii_alphabetic() || c == '_' || c == ':' || !c.is_ascii();
    start(first) && chars.all(|c| start(c) || c.is_ascii_digit() || c == '-' || c == '.')
}

fn local(qualified: &str) -> &str {
    qualified
        .split_once(':')
        .map_or(qualified, |(_, local_name)| local_name)
}

impl<'a> Element<'a> {
    pub(crate) fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn with_text(name: &'a str, text: &'a str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            text: Cow::Borrowed(text),
            ..Self::default()
        }
    }

    /// Tokenize `src` and return the first top-level element.
    ///
    /// Anything after the root is ignored. Declarations, comments, processing
    /// instructions and DOCTYPE are skipped.
    pub(crate) fn parse(src: &'a str) -> Result<Self, DecodeError> {
        let mut reader = Reader::from_str(src);
        reader.config_mut().expand_empty_elements = true;

        // Open elements, each with the byte offset where its content starts.
        let mut open: Vec<(Element<'a>, usize)> = Vec::new();
        loop {
            let before = reader.buffer_position() as usize;
            match reader.read_event()? {
                Event::Start(start) => {
                    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                    if !is_xml_name(&name) {
                        return Err(DecodeError::InvalidName(name));
                    }
                    let mut element = Element::new(name);
                    for attr in start.attributes() {
                        let attr = attr?;
                        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                        let value = attr.unescape_value()?.into_owned();
                        element.attributes.push((Cow::Owned(key), Cow::Owned(value)));
                    }
                    open.push((element, reader.buffer_position() as usize));
                }
                Event::End(end) => {
                    let Some((mut element, content_start)) = open.pop() else {
                        return Err(DecodeError::UnmatchedEnd(
                            String::from_utf8_lossy(end.name().as_ref()).into_owned(),
                        ));
                    };
                    element.raw = Some(src.get(content_start..before).unwrap_or_default());
                    match open.last_mut() {
                        Some((parent, _)) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Text(text) => {
                    if let Some((element, _)) = open.last_mut() {
                        element.text.to_mut().push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some((element, _)) = open.last_mut() {
                        element
                            .text
                            .to_mut()
                            .push_str(&String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => {
                    return Err(match open.pop() {
                        Some((element, _)) => DecodeError::UnexpectedEof(element.name.into_owned()),
                        None => DecodeError::MissingRoot,
                    });
                }
                _ => {}
            }
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn local_name(&self) -> &str {
        local(&self.name)
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Inner markup exactly as it appeared in the source.
    pub(crate) fn raw(&self) -> &str {
        self.raw.unwrap_or_default()
    }

    /// Attributes as `(qualified name, unescaped value)`.
    pub(crate) fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    /// Attribute value by exact qualified name.
    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v)
    }

    fn children_named<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s Element<'a>> {
        self.children.iter().filter(move |c| c.local_name() == name)
    }

    /// Last child with the given local name; later occurrences override earlier ones.
    pub(crate) fn child(&self, name: &str) -> Option<&Element<'a>> {
        self.children.iter().rev().find(|c| c.local_name() == name)
    }

    /// Text of a scalar child, or empty when the child is missing.
    pub(crate) fn string(&self, name: &str) -> String {
        self.child(name)
            .map(|c| c.text().to_owned())
            .unwrap_or_default()
    }

    /// Boolean child; missing or empty reads as `false`.
    pub(crate) fn flag(&self, name: &str) -> Result<bool, DecodeError> {
        match self.child(name) {
            Some(c) => parse_bool(name, c.text()),
            None => Ok(false),
        }
    }

    pub(crate) fn nested<T: FromElement>(&self, name: &str) -> Result<Option<T>, DecodeError> {
        self.child(name).map(T::from_element).transpose()
    }

    /// `<wrapper><item/>...</wrapper>` list. `None` when no wrapper is present,
    /// `Some(vec![])` for an empty wrapper. Items of repeated wrappers are
    /// concatenated.
    pub(crate) fn list<T: FromElement>(
        &self,
        wrapper: &str,
        item: &str,
    ) -> Result<Option<Vec<T>>, DecodeError> {
        let mut wrappers = self.children_named(wrapper).peekable();
        if wrappers.peek().is_none() {
            return Ok(None);
        }
        let mut out = Vec::new();
        for w in wrappers {
            for c in w.children_named(item) {
                out.push(T::from_element(c)?);
            }
        }
        Ok(Some(out))
    }

    /// Child elements in document order.
    pub(crate) fn children(&self) -> &[Element<'a>] {
        &self.children
    }

    pub(crate) fn push(&mut self, child: Element<'a>) {
        self.children.push(child);
    }

    pub(crate) fn push_attribute(&mut self, name: &'a str, value: &'a str) {
        if !value.is_empty() {
            self.attributes
                .push((Cow::Borrowed(name), Cow::Borrowed(value)));
        }
    }

    /// Scalar child; empty values are omitted.
    pub(crate) fn push_text(&mut self, name: &'a str, value: &'a str) {
        if !value.is_empty() {
            self.children.push(Element::with_text(name, value));
        }
    }

    /// Boolean child; `false` is omitted.
    pub(crate) fn push_flag(&mut self, name: &'a str, value: bool) {
        if value {
            self.children.push(Element::with_text(name, "true"));
        }
    }

    pub(crate) fn push_nested<T: ToElement>(&mut self, name: &'a str, value: Option<&'a T>) {
        if let Some(v) = value {
            self.children.push(v.to_element(name));
        }
    }

    /// Wrapped list; `None` is omitted, an empty list becomes an empty wrapper.
    pub(crate) fn push_list<T: ToElement>(
        &mut self,
        wrapper: &'a str,
        item: &'a str,
        values: Option<&'a [T]>,
    ) {
        let Some(values) = values else {
            return;
        };
        let mut list = Element::new(wrapper);
        for v in values {
            list.children.push(v.to_element(item));
        }
        self.children.push(list);
    }

    /// Content to be written verbatim, bypassing escaping and children.
    pub(crate) fn set_raw(&mut self, raw: &'a str) {
        self.raw = Some(raw);
    }

    pub(crate) fn write<W: io::Write>(&self, writer: &mut Writer<W>) -> Result<(), EncodeError> {
        if !is_xml_name(&self.name) {
            return Err(EncodeError::InvalidName(self.name.to_string()));
        }
        let mut start = BytesStart::new(self.name.as_ref());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_ref(), value.as_ref()));
        }
        writer.write_event(Event::Start(start))?;

        if let Some(raw) = self.raw {
            writer.write_event(Event::Text(BytesText::from_escaped(raw)))?;
        } else if self.children.is_empty() {
            // Also keeps empty wrappers on one line: `<licenses></licenses>`.
            writer.write_event(Event::Text(BytesText::new(self.text.as_ref())))?;
        } else {
            for child in &self.children {
                child.write(writer)?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new(self.name.as_ref())))?;
        Ok(())
    }
}

pub(crate) fn parse_bool(field: &str, raw: &str) -> Result<bool, DecodeError> {
    match raw.trim() {
        "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        other => Err(DecodeError::InvalidBool {
            field: field.to_owned(),
            value: other.to_owned(),
        }),
    }
}

impl FromElement for String {
    fn from_element(element: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(element.text().to_owned())
    }
}

impl ToElement for String {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        Element::with_text(name, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_tree_with_text_and_attributes() {
        let root = Element::parse(r#"<a x="1"><b>hi</b><c/></a>"#).unwrap();
        assert_eq!(root.name(), "a");
        assert_eq!(root.attribute("x"), Some("1"));
        assert_eq!(root.string("b"), "hi");
        assert!(root.child("c").is_some());
        assert_eq!(root.string("missing"), "");
    }

    #[test]
    fn unescapes_entities_and_cdata() {
        let root = Element::parse("<a><b>x &amp; y</b><c><![CDATA[<z>]]></c></a>").unwrap();
        assert_eq!(root.string("b"), "x & y");
        assert_eq!(root.string("c"), "<z>");
    }

    #[test]
    fn keeps_raw_inner_markup() {
        let src = "<a><cfg k=\"v\">\n  <x>1</x><!-- note -->\n</cfg></a>";
        let root = Element::parse(src).unwrap();
        assert_eq!(
            root.child("cfg").unwrap().raw(),
            "\n  <x>1</x><!-- note -->\n"
        );
    }

    #[test]
    fn last_duplicate_wins() {
        let root = Element::parse("<a><v>1</v><v>2</v></a>").unwrap();
        assert_eq!(root.string("v"), "2");
    }

    #[test]
    fn matches_children_by_local_name() {
        let root = Element::parse(r#"<p:a xmlns:p="urn:x"><p:b>1</p:b></p:a>"#).unwrap();
        assert_eq!(root.local_name(), "a");
        assert_eq!(root.string("b"), "1");
    }

    #[test]
    fn list_distinguishes_absent_and_empty() {
        let root = Element::parse("<a><items></items></a>").unwrap();
        let empty: Option<Vec<String>> = root.list("items", "item").unwrap();
        assert_eq!(empty, Some(vec![]));
        let absent: Option<Vec<String>> = root.list("others", "item").unwrap();
        assert_eq!(absent, None);
    }

    #[test]
    fn rejects_mismatched_nesting() {
        assert!(Element::parse("<a><b></a></b>").is_err());
    }

    #[test]
    fn rejects_unclosed_root() {
        let err = Element::parse("<a><b></b>").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedEof(_) | DecodeError::Xml(_)
        ));
    }

    #[test]
    fn rejects_start_tag_without_name() {
        let err = Element::parse("<a><>1</></a>").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidName(ref n) if n.is_empty()));
    }

    #[test]
    fn refuses_to_write_invalid_names() {
        for bad in ["", "a b", "1a", "-x", "a<b"] {
            let mut root = Element::new("a");
            root.push(Element::with_text(bad, "1"));
            let mut writer = Writer::new(Vec::new());
            let err = root.write(&mut writer).unwrap_err();
            assert!(matches!(err, EncodeError::InvalidName(ref n) if n == bad), "{bad:?}");
        }
    }

    #[test]
    fn accepts_qualified_and_dotted_names() {
        for good in ["a", "_x", "p:a", "combine.children", "maven-compiler.version", "é1"] {
            assert!(is_xml_name(good), "{good:?}");
        }
    }

    #[test]
    fn rejects_empty_input() {
        let err = Element::parse("  <!-- nothing -->  ").unwrap_err();
        assert!(matches!(err, DecodeError::MissingRoot));
    }

    #[test]
    fn parses_booleans() {
        assert!(parse_bool("f", " true ").unwrap());
        assert!(parse_bool("f", "1").unwrap());
        assert!(!parse_bool("f", "").unwrap());
        assert!(!parse_bool("f", "False").unwrap());
        assert!(parse_bool("f", "yes").is_err());
    }

    #[test]
    fn writes_empty_element_on_one_line() {
        let mut root = Element::new("a");
        root.push(Element::new("empty"));
        root.push_text("v", "x < y");
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
        root.write(&mut writer).unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "<a>\n    <empty></empty>\n    <v>x &lt; y</v>\n</a>");
    }
}
