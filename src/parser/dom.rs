use scraper::{ElementRef, Html};
use tracing::warn;

/// Element predicate used to navigate a parsed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Tag(&'static str),
    #[allow(dead_code)]
    Class(&'static str),
    TagClass {
        tag: &'static str,
        class: &'static str,
    },
    #[allow(dead_code)]
    Attr {
        name: &'static str,
        value: &'static str,
    },
}

impl Selector {
    pub fn to_css(&self) -> String {
        match self {
            Selector::Tag(tag) => tag.to_string(),
            Selector::Class(class) => format!(".{}", class),
            Selector::TagClass { tag, class } => format!("{}.{}", tag, class),
            Selector::Attr { name, value } => format!("[{}=\"{}\"]", name, value),
        }
    }

    /// An invalid selector matches nothing instead of failing the page.
    fn compile(&self) -> Option<scraper::Selector> {
        let css = self.to_css();
        let compiled = match scraper::Selector::parse(&css) {
            Ok(sel) => Some(sel),
            Err(e) => {
                warn!("Invalid selector {:?}: {}", css, e);
                None
            }
        };
        compiled
    }
}

/// Parsed HTML document. Parsing never fails; broken markup is repaired by html5ever.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn find_all(&self, selector: Selector) -> Vec<Node<'_>> {
        match selector.compile() {
            Some(sel) => self.html.select(&sel).map(Node).collect(),
            None => Vec::new(),
        }
    }

    pub fn find(&self, selector: Selector) -> Option<Node<'_>> {
        let sel = selector.compile()?;
        self.html.select(&sel).next().map(Node)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// Descendants matching `selector`, in document order.
    pub fn find_all(&self, selector: Selector) -> Vec<Node<'a>> {
        match selector.compile() {
            Some(sel) => self.0.select(&sel).map(Node).collect(),
            None => Vec::new(),
        }
    }

    pub fn find(&self, selector: Selector) -> Option<Node<'a>> {
        let sel = selector.compile()?;
        self.0.select(&sel).next().map(Node)
    }

    /// Text content with every fragment trimmed and blank fragments dropped.
    pub fn text(&self) -> String {
        self.0
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

// ── Tests ──
