//! Paginated HTTP access to the balldontlie API.

use log::debug;
use reqwest::{header::HeaderMap, Client};

use super::types::{Page, RawRecord};
use crate::{
    core::http::{common_headers, resolve_api_uri},
    error::{NbaError, Result},
};


/// Ordered query pairs; repeated keys (`seasons[]`) are allowed.
pub type QueryParams = Vec<(String, String)>;

const PAGE_PARAM: &str = "page";
const USER_AGENT: &str = concat!("nba-stats/", env!("CARGO_PKG_VERSION"));

/// Client bound to one API base.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, headers: HeaderMap) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| NbaError::fetch(&base_url, e))?;

        Ok(Self {
            client,
            base_url,
            headers,
        })
    }

    /// Client configured from `--api-uri`, `NBA_API_URI` and `BALLDONTLIE_API_KEY`.
    pub fn from_env(api_uri: Option<String>) -> Result<Self> {
        Self::new(resolve_api_uri(api_uri), common_headers()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Request a single page. Transport, status and decoding failures all
    /// come back as [`NbaError::Fetch`].
    pub async fn fetch_page(&self, url: &str, query: &[(String, String)]) -> Result<Page> {
        debug!("Requesting {} with {:?}", url, query);

        let res = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .query(query)
            .send()
            .await
            .map_err(|e| NbaError::fetch(url, e))?
            .error_for_status()
            .map_err(|e| NbaError::fetch(url, e))?;

        res.json::<Page>().await.map_err(|e| NbaError::fetch(url, e))
    }

    /// Walk `endpoint` page by page until `meta.current_page >= meta.total_pages`
    /// and return every record in page order.
    ///
    /// Starts at the caller's `page` parameter, or page 1 when it is absent.
    /// Pages are requested one after another since each request needs the
    /// previous response's `next_page`. Any failed page aborts the walk and
    /// nothing collected so far is returned.
    pub async fn fetch_all(&self, endpoint: &str, params: QueryParams) -> Result<Vec<RawRecord>> {
        let url = self.endpoint_url(endpoint);
        let (mut page, params) = split_page_param(params);
        let mut records = Vec::new();

        loop {
            let mut query = params.clone();
            query.push((PAGE_PARAM.to_string(), page.to_string()));

            let Page { data, meta } = self.fetch_page(&url, &query).await?;
            debug!(
                "Got {} records from page {}/{} of {}",
                data.len(),
                meta.current_page,
                meta.total_pages,
                url
            );
            records.extend(data);

            if meta.current_page >= meta.total_pages {
                break;
            }

            page = match meta.next_page {
                Some(next) if next > meta.current_page => next,
                Some(next) => {
                    return Err(NbaError::fetch(
                        &url,
                        format!(
                            "next_page {} does not advance past page {}",
                            next, meta.current_page
                        ),
                    ))
                }
                None => {
                    return Err(NbaError::fetch(
                        &url,
                        format!(
                            "page {} of {} has no next_page",
                            meta.current_page, meta.total_pages
                        ),
                    ))
                }
            };
        }

        Ok(records)
    }
}

/// Pull `page` out of `params`, defaulting to 1 when it is missing, empty or zero.
fn split_page_param(params: QueryParams) -> (u32, QueryParams) {
    let mut page = None;
    let rest = params
        .into_iter()
        .filter(|(key, value)| {
            if key == PAGE_PARAM {
                page = value.trim().parse::<u32>().ok();
                false
            } else {
                true
            }
        })
        .collect();

    (page.filter(|p| *p > 0).unwrap_or(1), rest)
}
