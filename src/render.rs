//! HTML rendering of a [`ViewSpec`] for the browser.
//!
//! The map is drawn client-side by deck.gl: the serialized [`MapSpec`] is embedded as
//! JSON and converted with `@deck.gl/json`. Fetching the boundary GeoJSON and the
//! basemap tiles happens entirely in the browser.

use crate::compose::{MapSpec, TableSpec};
use crate::format::ensure_currency;
use crate::page::{Content, Page, ViewSpec};
use anyhow::{Context, Result};
use std::fmt::Write;

const DECK_SCRIPT: &str = "https://unpkg.com/deck.gl@9.0.38/dist.min.js";
const DECK_JSON_SCRIPT: &str = "https://unpkg.com/@deck.gl/json@9.0.38/dist.min.js";
const MAPLIBRE_SCRIPT: &str = "https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.js";
const MAPLIBRE_CSS: &str = "https://unpkg.com/maplibre-gl@4.7.1/dist/maplibre-gl.css";
const BASEMAP_STYLE: &str = "https://basemaps.cartocdn.com/gl/positron-gl-style/style.json";

const STYLE: &str = "body{margin:0;font-family:sans-serif;display:flex;min-height:100vh}\
nav{width:14rem;padding:1rem;background:#f0f2f6}\
nav a{display:block;padding:.3rem 0;color:#31333f}\
nav a.current{font-weight:bold}\
main{flex:1;padding:1rem 2rem}\
#map{position:relative;width:100%}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ddd;padding:.4rem;text-align:left}\
td.num{text-align:right}";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// JSON that can sit inside a `<script>` element without closing it.
fn script_json(spec: &MapSpec) -> Result<String> {
    let json = serde_json::to_string(spec).context("Failed to serialize map spec")?;
    Ok(json.replace("</", "<\\/"))
}

pub fn render_document(view: &ViewSpec) -> Result<String> {
    let frame = &view.frame;
    let mut html = String::new();

    writeln!(html, "<!DOCTYPE html>\n<html lang=\"en\">\n<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(html, "<title>{}</title>", escape_html(&frame.page_title))?;
    writeln!(html, "<style>{}</style>", STYLE)?;
    if matches!(view.content, Content::Map { .. }) {
        writeln!(html, "<link rel=\"stylesheet\" href=\"{}\">", MAPLIBRE_CSS)?;
        for src in [MAPLIBRE_SCRIPT, DECK_SCRIPT, DECK_JSON_SCRIPT] {
            writeln!(html, "<script src=\"{}\"></script>", src)?;
        }
    }
    writeln!(html, "</head>\n<body>")?;

    render_nav(&mut html, frame.selected)?;

    writeln!(html, "<main>")?;
    writeln!(html, "<h1>{}</h1>\n<hr>", escape_html(&frame.title))?;
    match &view.content {
        Content::Home {
            header,
            paragraphs,
            features_heading,
            features,
        } => {
            writeln!(html, "<h2>{}</h2>", escape_html(header))?;
            for p in paragraphs {
                writeln!(html, "<p>{}</p>", escape_html(p))?;
            }
            writeln!(html, "<h3>{}</h3>\n<ul>", escape_html(features_heading))?;
            for f in features {
                writeln!(
                    html,
                    "<li><strong>{}</strong>: {}</li>",
                    escape_html(f.label),
                    escape_html(f.description)
                )?;
            }
            writeln!(html, "</ul>")?;
        }
        Content::Map {
            map_heading,
            map,
            table_heading,
            table,
        } => {
            writeln!(html, "<h3>{}</h3>", escape_html(map_heading))?;
            render_map(&mut html, map)?;
            writeln!(html, "<h3>{}</h3>", escape_html(table_heading))?;
            render_table(&mut html, table)?;
        }
    }
    writeln!(html, "<hr>\n<footer>{}</footer>", escape_html(&frame.footer))?;
    writeln!(html, "</main>\n</body>\n</html>")?;

    Ok(html)
}

fn render_nav(html: &mut String, selected: Page) -> Result<()> {
    writeln!(html, "<nav>\n<h2>Navigation</h2>")?;
    for page in Page::ALL {
        let class = if page == selected { " class=\"current\"" } else { "" };
        writeln!(
            html,
            "<a href=\"/?page={}\"{}>{}</a>",
            page.name().to_ascii_lowercase(),
            class,
            page.name()
        )?;
    }
    writeln!(html, "</nav>")?;
    Ok(())
}

fn render_map(html: &mut String, map: &MapSpec) -> Result<()> {
    writeln!(html, "<div id=\"map\" style=\"height:{}px\"></div>", map.height)?;
    writeln!(
        html,
        "<script id=\"deck-spec\" type=\"application/json\">{}</script>",
        script_json(map)?
    )?;
    writeln!(
        html,
        r#"<script>
const spec = JSON.parse(document.getElementById('deck-spec').textContent);
const tooltip = spec.tooltip;
delete spec.tooltip;
const props = new deck.JSONConverter({{configuration: {{classes: deck}}}}).convert(spec);
new deck.DeckGL({{
  ...props,
  container: 'map',
  mapStyle: spec.mapStyle || '{}',
  getTooltip: ({{object}}) => object && {{text: tooltip.text.replace('{{tooltip}}', object.tooltip)}},
}});
</script>"#,
        BASEMAP_STYLE
    )?;
    Ok(())
}

fn render_table(html: &mut String, table: &TableSpec) -> Result<()> {
    writeln!(html, "<table>\n<thead><tr>")?;
    for column in table.columns {
        writeln!(html, "<th>{}</th>", escape_html(column))?;
    }
    writeln!(html, "</tr></thead>\n<tbody>")?;
    for row in &table.rows {
        writeln!(
            html,
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            escape_html(&row.city),
            row.donations,
            escape_html(&ensure_currency(&row.total_amount))
        )?;
    }
    writeln!(html, "</tbody>\n</table>")?;
    Ok(())
}
