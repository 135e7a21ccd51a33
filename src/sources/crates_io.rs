//! crates.io search source
//!
//! Pages through the crates.io search API. Each request runs on its own
//! worker thread and answers with an empty page on failure, which ends the
//! session instead of leaving it loading.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::http::HTTP_AGENT;
use crate::loader::{ItemSource, PageRequest, Reply};
use crate::model::Choice;

const API_URL: &str = "https://crates.io/api/v1/crates";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    crates: Vec<CrateHit>,
}

#[derive(Debug, Deserialize)]
struct CrateHit {
    name: String,
    #[serde(default)]
    max_version: Option<String>,
    #[serde(default)]
    yanked: bool,
}

impl CrateHit {
    fn into_choice(self) -> Choice {
        let label = match &self.max_version {
            Some(version) => format!("{} {}", self.name, version),
            None => self.name.clone(),
        };
        Choice {
            value: Some(self.name),
            label,
            disabled: self.yanked,
            selected: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CratesIoSource {
    per_page: usize,
}

impl CratesIoSource {
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.clamp(1, 100),
        }
    }

    /// Build the search URL. crates.io pages are 1-based.
    pub fn url(&self, term: &str, page: usize) -> String {
        format!(
            "{}?q={}&page={}&per_page={}",
            API_URL,
            urlencoding::encode(term),
            page + 1,
            self.per_page
        )
    }

    /// Blocking search for one page
    pub fn search(&self, term: &str, page: usize) -> Result<Vec<Choice>> {
        let url = self.url(term, page);
        let mut response = HTTP_AGENT
            .get(&url)
            .call()
            .context("Failed to fetch from crates.io")?;
        let response: SearchResponse = response
            .body_mut()
            .read_json()
            .context("Failed to parse crates.io response")?;
        Ok(response
            .crates
            .into_iter()
            .map(CrateHit::into_choice)
            .collect())
    }
}

impl ItemSource<Choice> for CratesIoSource {
    fn fetch(&mut self, request: &PageRequest, reply: Reply<Choice>) {
        let source = self.clone();
        let request = request.clone();
        std::thread::spawn(move || {
            let items = source
                .search(&request.term, request.page)
                .unwrap_or_else(|e| {
                    tracing::warn!(
                        target: "droplist::sources",
                        term = %request.term,
                        page = request.page,
                        "crates.io search failed: {e:#}"
                    );
                    Vec::new()
                });
            reply.deliver(items);
        });
    }
}
