//! HTML page template.
//!
//! The template is embedded at compile time and rendered with minijinja.
//! Section variables are injected verbatim; only the page settings are
//! escaped inside the template.

use minihtml_config::PageConfig;
use minihtml_renderer::{Section, Sections};
use minijinja::{AutoEscape, Environment, context};

/// Embedded page template.
const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

const TEMPLATE_NAME: &str = "page.html";

/// Page chrome around the converted article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    /// Document `<title>`.
    pub title: String,
    /// Stylesheet href.
    pub stylesheet: String,
    /// Favicon href.
    pub favicon: String,
    /// Header banner image; omitted when `None`.
    pub logo: Option<String>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "API Reference".to_owned(),
            stylesheet: "css/api.css".to_owned(),
            favicon: "images/favicon.png".to_owned(),
            logo: None,
        }
    }
}

impl From<&PageConfig> for PageSettings {
    /// Apply the configured overrides on top of the defaults.
    fn from(page: &PageConfig) -> Self {
        let defaults = Self::default();
        Self {
            title: page.title.clone().unwrap_or(defaults.title),
            stylesheet: page.stylesheet.clone().unwrap_or(defaults.stylesheet),
            favicon: page.favicon.clone().unwrap_or(defaults.favicon),
            logo: page.logo.clone().or(defaults.logo),
        }
    }
}

/// Parsed page template.
pub struct PageTemplate {
    env: Environment<'static>,
}

impl PageTemplate {
    /// Parse the embedded template.
    pub fn new() -> Result<Self, minijinja::Error> {
        Self::from_source(PAGE_TEMPLATE)
    }

    /// Parse a custom template exposing the same variables as the embedded one.
    pub fn from_source(source: &'static str) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(TEMPLATE_NAME, source)?;
        Ok(Self { env })
    }

    /// Render `sections` into a complete HTML document.
    pub fn render(
        &self,
        sections: &Sections,
        settings: &PageSettings,
    ) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        template.render(context! {
            title => settings.title,
            stylesheet => settings.stylesheet,
            favicon => settings.favicon,
            logo => settings.logo,
            head => sections.render(Section::Head),
            header => sections.render(Section::Header),
            nav => sections.render(Section::Nav),
            body => sections.render(Section::Body),
            footer => sections.render(Section::Footer),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sections() -> Sections {
        let mut sections = Sections::new();
        sections.push(Section::Nav, "<div class=\"sidenav\"></div>");
        sections.push(Section::Body, "<p>\n");
        sections.push(Section::Body, "text &lt;b&gt;<br/>");
        sections.push(Section::Footer, "<small>footer</small>");
        sections
    }

    #[test]
    fn test_render_injects_sections_verbatim() {
        let template = PageTemplate::new().unwrap();
        let html = template
            .render(&sample_sections(), &PageSettings::default())
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div class=\"sidenav\"></div>"));
        assert!(html.contains("<main>\n        <p>\ntext &lt;b&gt;<br/>\n    </main>"));
        assert!(html.contains("<small>footer</small>"));
    }

    #[test]
    fn test_render_page_settings() {
        let template = PageTemplate::new().unwrap();
        let settings = PageSettings {
            title: "Tools & API".to_owned(),
            stylesheet: "style.css".to_owned(),
            favicon: "icon.png".to_owned(),
            logo: Some("logo.png".to_owned()),
        };
        let html = template.render(&Sections::new(), &settings).unwrap();

        assert!(html.contains("<title>Tools &amp; API</title>"));
        assert!(html.contains("href=\"style.css\""));
        assert!(html.contains("href=\"icon.png\""));
        assert!(html.contains("<img src=\"logo.png\""));
    }

    #[test]
    fn test_render_without_logo() {
        let template = PageTemplate::new().unwrap();
        let html = template
            .render(&Sections::new(), &PageSettings::default())
            .unwrap();

        assert!(!html.contains("<img"));
        assert!(html.contains("<title>API Reference</title>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let template = PageTemplate::new().unwrap();
        let sections = sample_sections();
        let settings = PageSettings::default();

        assert_eq!(
            template.render(&sections, &settings).unwrap(),
            template.render(&sections, &settings).unwrap()
        );
    }

    #[test]
    fn test_settings_from_empty_page_config_use_defaults() {
        assert_eq!(
            PageSettings::from(&PageConfig::default()),
            PageSettings::default()
        );
    }

    #[test]
    fn test_settings_from_page_config_overrides() {
        let page = PageConfig {
            title: Some("Minimega API".to_owned()),
            logo: Some("images/logo.png".to_owned()),
            ..Default::default()
        };

        let settings = PageSettings::from(&page);

        assert_eq!(settings.title, "Minimega API");
        assert_eq!(settings.logo.as_deref(), Some("images/logo.png"));
        assert_eq!(settings.stylesheet, "css/api.css");
        assert_eq!(settings.favicon, "images/favicon.png");
    }

    #[test]
    fn test_invalid_template_fails_to_parse() {
        assert!(PageTemplate::from_source("{% if %}").is_err());
    }

    #[test]
    fn test_custom_template() {
        let template = PageTemplate::from_source("{{ title }}|{{ nav }}|{{ body }}").unwrap();
        let html = template
            .render(&sample_sections(), &PageSettings::default())
            .unwrap();

        assert_eq!(
            html,
            "API Reference|<div class=\"sidenav\"></div>|<p>\ntext &lt;b&gt;<br/>"
        );
    }
}
