#![forbid(unsafe_code)]

//! Feature comparison tables.

use teems_render::markup::Element;
use teems_render::Node;

use crate::Widget;

/// One cell: a supported/unsupported flag or free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue {
    Flag(bool),
    Text(&'static str),
}

impl CellValue {
    fn render(self) -> Element {
        match self {
            CellValue::Flag(true) => Element::new("span")
                .class("cell-flag supported")
                .attr("aria-label", "Supported")
                .text("\u{2713}"),
            CellValue::Flag(false) => Element::new("span")
                .class("cell-flag unsupported")
                .attr("aria-label", "Not available")
                .text("\u{2717}"),
            CellValue::Text(text) => Element::new("span").class("cell-text").text(text),
        }
    }
}

/// A named feature with one value per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub values: &'static [CellValue],
}

/// A titled group of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonCategory {
    pub name: &'static str,
    pub rows: &'static [ComparisonRow],
}

/// Column headers plus categories, rendered as one table per category.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonTable<'a> {
    pub columns: &'a [&'static str],
    pub categories: &'a [ComparisonCategory],
}

impl Widget for ComparisonTable<'_> {
    fn render(&self) -> Node {
        let header = Element::new("thead").child(
            Element::new("tr")
                .child(Element::new("th").attr("scope", "col").class("feature-col"))
                .children_from(
                    self.columns
                        .iter()
                        .map(|c| Element::new("th").attr("scope", "col").text(*c)),
                ),
        );

        let tables = self.categories.iter().map(|category| {
            let rows = category.rows.iter().map(|row| {
                if row.values.len() != self.columns.len() {
                    tracing::warn!(
                        feature = row.feature,
                        values = row.values.len(),
                        columns = self.columns.len(),
                        "comparison row width differs from header"
                    );
                }
                Element::new("tr")
                    .child(Element::new("th").attr("scope", "row").text(row.feature))
                    .children_from(
                        row.values
                            .iter()
                            .map(|v| Element::new("td").child(v.render())),
                    )
            });
            Element::new("table")
                .class("comparison-table")
                .child(Element::new("caption").text(category.name))
                .child(header.clone())
                .child(Element::new("tbody").children_from(rows))
        });

        let legend = Element::new("div")
            .class("comparison-legend")
            .child(CellValue::Flag(true).render())
            .child(Element::new("span").text("Supported"))
            .child(CellValue::Flag(false).render())
            .child(Element::new("span").text("Not available"));

        Element::new("div")
            .class("comparison")
            .children_from(tables)
            .child(legend)
            .into()
    }
}
