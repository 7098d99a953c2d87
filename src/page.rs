use crate::compose::{build_table_spec, compose, MapSpec, TableSpec};
use crate::config::AppConfig;
use crate::error::PageParseError;
use crate::types::DonationRecord;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Page {
    Home,
    #[default]
    Map,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Map];

    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Map => "Map",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = PageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "map" => Ok(Page::Map),
            _ => Err(PageParseError(s.to_string())),
        }
    }
}

/// Chrome shared by every page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub page_title: String,
    pub title: String,
    pub footer: String,
    pub selected: Page,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum Content {
    Home {
        header: &'static str,
        paragraphs: Vec<&'static str>,
        features_heading: &'static str,
        features: Vec<Feature>,
    },
    Map {
        map_heading: &'static str,
        map: MapSpec,
        table_heading: &'static str,
        table: TableSpec,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSpec {
    pub frame: Frame,
    pub content: Content,
}

/// Builds the view for `selection`. Pure: no session state is read or written.
pub fn render_page(selection: Page, records: &[DonationRecord], config: &AppConfig) -> ViewSpec {
    let frame = Frame {
        page_title: config.site.page_title.clone(),
        title: config.site.title.clone(),
        footer: config.site.footer.clone(),
        selected: selection,
    };

    let content = match selection {
        Page::Home => home_content(),
        Page::Map => Content::Map {
            map_heading: "Map View",
            map: compose(records, &config.map),
            table_heading: "Data Points",
            table: build_table_spec(records),
        },
    };

    ViewSpec { frame, content }
}

fn home_content() -> Content {
    Content::Home {
        header: "Welcome!",
        paragraphs: vec![
            "This is a sample interactive map application.",
            "Use the sidebar to navigate between different pages.",
        ],
        features_heading: "Features",
        features: vec![
            Feature {
                label: "Map Visualization",
                description: "Interactive map of THI donations across Australia",
            },
            Feature {
                label: "Data Display",
                description: "Data table showing the data used in the map",
            },
            Feature {
                label: "Modern UI",
                description: "Clean and responsive design",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn parses_page_names_case_insensitively() {
        assert_eq!("home".parse::<Page>(), Ok(Page::Home));
        assert_eq!(" MAP ".parse::<Page>(), Ok(Page::Map));
        assert_eq!(
            "settings".parse::<Page>(),
            Err(PageParseError("settings".to_string()))
        );
    }

    #[test]
    fn map_is_the_default_page() {
        assert_eq!(Page::default(), Page::Map);
    }

    #[test]
    fn home_page_has_no_map() {
        let records = data::records().unwrap();
        let view = render_page(Page::Home, &records, &AppConfig::default());
        assert_eq!(view.frame.selected, Page::Home);
        assert_eq!(view.frame.footer, "Built by RAP Media");
        match view.content {
            Content::Home { header, features, .. } => {
                assert_eq!(header, "Welcome!");
                assert_eq!(features.len(), 3);
            }
            other => panic!("expected home content, got {:?}", other),
        }
    }

    #[test]
    fn map_page_carries_map_and_table() {
        let records = data::records().unwrap();
        let view = render_page(Page::Map, &records, &AppConfig::default());
        match view.content {
            Content::Map { map, table, .. } => {
                assert_eq!(map.layers.len(), 2);
                assert_eq!(table.rows.len(), records.len());
            }
            other => panic!("expected map content, got {:?}", other),
        }
    }

    #[test]
    fn rendering_is_repeatable() {
        let records = data::records().unwrap();
        let config = AppConfig::default();
        assert_eq!(
            render_page(Page::Map, &records, &config),
            render_page(Page::Map, &records, &config)
        );
    }
}
