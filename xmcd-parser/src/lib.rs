//! Document model for Mathcad `.xmcd` worksheets
//!
//! A worksheet is namespaced XML: the math vocabulary lives under the
//! `math30` namespace, the worksheet structure (regions, text paragraphs)
//! under `worksheet30`. This crate parses the raw XML with roxmltree and
//! exposes the small read-only element API the converter needs: local tag
//! name, element children in document order, text content, namespace.
//!
//! The parsed tree is never mutated; the namespace-free tag name is a
//! derived accessor, so traversal is idempotent and replayable.

pub mod error;

pub use error::WorksheetError;

/// Namespace URI of the Mathcad math vocabulary (`apply`, `real`, `id`, ...).
pub const MATH_NS: &str = "http://schemas.mathsoft.com/math30";

/// Namespace URI of the worksheet structure (`regions`, `math`, `text`, ...).
pub const WORKSHEET_NS: &str = "http://schemas.mathsoft.com/worksheet30";

/// A parsed worksheet. Borrows the source string for its lifetime.
#[derive(Debug)]
pub struct Worksheet<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> Worksheet<'input> {
    /// Parse worksheet XML. Structural XML errors are fatal here; the
    /// shape of the worksheet is only checked by [`Worksheet::regions`].
    pub fn parse(source: &'input str) -> Result<Self, WorksheetError> {
        let doc = roxmltree::Document::parse(source)?;
        Ok(Worksheet { doc })
    }

    /// The root element of the document.
    pub fn root(&self) -> Element<'_, 'input> {
        Element(self.doc.root_element())
    }

    /// The ordered worksheet regions.
    ///
    /// Mathcad stores the region list as the root element's fourth child
    /// (index 3, after metadata/settings/styles). A document without that
    /// child is malformed and the conversion must not start.
    pub fn regions(&self) -> Result<Vec<Element<'_, 'input>>, WorksheetError> {
        let root = self.root();
        let list = root
            .child(3)
            .ok_or_else(|| WorksheetError::MissingRegionList {
                found: root.child_count(),
            })?;
        Ok(list.children().collect())
    }
}

/// A read-only view of one element of the worksheet tree.
///
/// Children are element children only: interleaved text nodes (indentation
/// whitespace in pretty-printed files) do not count towards child indices.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a, 'input>(roxmltree::Node<'a, 'input>);

impl<'a, 'input: 'a> Element<'a, 'input> {
    /// Tag name without its namespace prefix.
    pub fn local_name(&self) -> &'a str {
        self.0.tag_name().name()
    }

    /// Namespace URI of the tag, if any.
    pub fn namespace(&self) -> Option<&'a str> {
        self.0.tag_name().namespace()
    }

    /// Element children in document order.
    pub fn children(&self) -> impl Iterator<Item = Element<'a, 'input>> {
        self.0.children().filter(|n| n.is_element()).map(Element)
    }

    /// The `index`-th element child.
    pub fn child(&self, index: usize) -> Option<Element<'a, 'input>> {
        self.children().nth(index)
    }

    /// Number of element children.
    pub fn child_count(&self) -> usize {
        self.children().count()
    }

    /// Text content directly inside this element, if any.
    pub fn text(&self) -> Option<&'a str> {
        self.0.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<worksheet xmlns="http://schemas.mathsoft.com/worksheet30"
                 xmlns:ml="http://schemas.mathsoft.com/math30">
  <metadata/>
  <settings/>
  <styles/>
  <regions>
    <region><math><ml:real>7</ml:real></math></region>
    <region><text><p>Hi</p></text></region>
  </regions>
</worksheet>"#;

    #[test]
    fn parses_regions_at_index_three() {
        let ws = Worksheet::parse(SAMPLE).unwrap();
        let regions = ws.regions().unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].local_name(), "region");
    }

    #[test]
    fn local_name_strips_namespace_prefix() {
        let ws = Worksheet::parse(SAMPLE).unwrap();
        let regions = ws.regions().unwrap();
        let math = regions[0].child(0).unwrap();
        assert_eq!(math.local_name(), "math");
        assert_eq!(math.namespace(), Some(WORKSHEET_NS));
        let real = math.child(0).unwrap();
        assert_eq!(real.local_name(), "real");
        assert_eq!(real.namespace(), Some(MATH_NS));
        assert_eq!(real.text(), Some("7"));
    }

    #[test]
    fn children_skip_interleaved_text_nodes() {
        let ws = Worksheet::parse(SAMPLE).unwrap();
        // Pretty-printed XML has whitespace text nodes between every element.
        assert_eq!(ws.root().child_count(), 4);
        assert_eq!(ws.root().child(3).unwrap().local_name(), "regions");
    }

    #[test]
    fn short_document_is_missing_its_region_list() {
        let ws = Worksheet::parse("<worksheet><metadata/><settings/></worksheet>").unwrap();
        match ws.regions() {
            Err(WorksheetError::MissingRegionList { found }) => assert_eq!(found, 2),
            other => panic!("expected MissingRegionList, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn corrupted_xml_is_a_parse_error() {
        let err = Worksheet::parse("<worksheet><unclosed>").unwrap_err();
        assert!(matches!(err, WorksheetError::Xml(_)));
    }
}
