use serde::Serialize;
use serde_json::json;

use crate::page::{Element, Tag};

pub const RESULTS_ID: &str = "search-results";
pub const PROCESS_ID: &str = "search-process";
pub const QUERY_ID: &str = "search-query";
pub const QUERY_CONTAINER_ID: &str = "search-query-container";

/// Text of the "<status> results for ..." indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchStatus {
    Showing,
    No,
}

impl SearchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SearchStatus::Showing => "Showing",
            SearchStatus::No => "No",
        }
    }
}

/// The parts of the search page the renderer is allowed to touch.
pub trait SearchView {
    /// The list results are appended to.
    fn results_container(&mut self) -> &mut Element;
    fn hide_results(&mut self);
    fn set_status(&mut self, status: SearchStatus);
    fn set_query_input(&mut self, query: &str);
    fn set_query_label(&mut self, query: &str);
    fn show_query_container(&mut self);
}

/// In-memory search page, mirroring the elements of the page template.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub results: Element,
    pub process: Element,
    pub query_label: Element,
    pub query_container: Element,
    pub search_input: String,
    status: Option<SearchStatus>,
}

impl Default for PageView {
    fn default() -> Self {
        PageView::new()
    }
}

impl PageView {
    pub fn new() -> PageView {
        let mut query_container = Element::new(Tag::Span).with_attribute("id", QUERY_CONTAINER_ID);
        query_container.set_display("none");
        PageView {
            results: Element::new(Tag::Ul).with_attribute("id", RESULTS_ID),
            process: Element::new(Tag::Span).with_attribute("id", PROCESS_ID),
            query_label: Element::new(Tag::Span).with_attribute("id", QUERY_ID),
            query_container,
            search_input: String::new(),
            status: None,
        }
    }

    pub fn status(&self) -> Option<SearchStatus> {
        self.status
    }

    pub fn results_html(&self) -> String {
        self.results.to_html()
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "search_input": self.search_input,
            "query": self.query_label.text_content(),
            "query_visible": !self.query_container.is_hidden(),
            "status": self.status.map(|status| status.label()),
            "results_hidden": self.results.is_hidden(),
            "results": self.results,
            "results_html": self.results_html(),
        })
    }
}

impl SearchView for PageView {
    fn results_container(&mut self) -> &mut Element {
        &mut self.results
    }

    fn hide_results(&mut self) {
        self.results.set_display("none");
    }

    fn set_status(&mut self, status: SearchStatus) {
        self.status = Some(status);
        self.process.set_text(status.label());
    }

    fn set_query_input(&mut self, query: &str) {
        self.search_input = query.to_string();
    }

    fn set_query_label(&mut self, query: &str) {
        self.query_label.set_text(query);
    }

    fn show_query_container(&mut self) {
        self.query_container.set_display("inline");
    }
}
