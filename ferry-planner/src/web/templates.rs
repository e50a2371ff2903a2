//! Askama templates for the web frontend.

use askama::Template;

use crate::render::FerryTableEntry;

/// Ferry table page: one table per ferry that some bus reaches.
#[derive(Template)]
#[template(path = "ferry_table.html")]
pub struct FerryTableTemplate {
    pub from: String,
    pub to: String,
    pub generated_at: String,
    pub ferries: Vec<FerryTableEntry>,
}

impl FerryTableTemplate {
    /// Build the page, leaving out ferries no bus can reach.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        generated_at: impl Into<String>,
        table: Vec<FerryTableEntry>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            generated_at: generated_at.into(),
            ferries: table
                .into_iter()
                .filter(|entry| !entry.buses.is_empty())
                .collect(),
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}
