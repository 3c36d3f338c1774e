//! Named output sections.

/// One of the five injection points of the page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Head,
    Header,
    Nav,
    Body,
    Footer,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Self; 5] = [Self::Head, Self::Header, Self::Nav, Self::Body, Self::Footer];

    /// Template variable name of the section.
    pub fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Header => "header",
            Self::Nav => "nav",
            Self::Body => "body",
            Self::Footer => "footer",
        }
    }
}

/// Rendered HTML fragments, in insertion order, for each [`Section`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sections {
    head: Vec<String>,
    header: Vec<String>,
    nav: Vec<String>,
    body: Vec<String>,
    footer: Vec<String>,
}

impl Sections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment to `section`.
    pub fn push(&mut self, section: Section, fragment: impl Into<String>) {
        self.fragments_mut(section).push(fragment.into());
    }

    /// Fragments of `section` in insertion order.
    pub fn fragments(&self, section: Section) -> &[String] {
        match section {
            Section::Head => &self.head,
            Section::Header => &self.header,
            Section::Nav => &self.nav,
            Section::Body => &self.body,
            Section::Footer => &self.footer,
        }
    }

    /// Concatenation of the fragments of `section`.
    pub fn render(&self, section: Section) -> String {
        self.fragments(section).concat()
    }

    fn fragments_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Head => &mut self.head,
            Section::Header => &mut self.header,
            Section::Nav => &mut self.nav,
            Section::Body => &mut self.body,
            Section::Footer => &mut self.footer,
        }
    }
}
