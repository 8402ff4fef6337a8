//! Backend Calls
//!
//! Async wrappers around the two GET endpoints the page talks to, built on
//! the browser fetch API.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::{LikeFragments, PlanPage};

/// Like-toggle endpoint prefix; the comment id is appended per call
pub const LIKE_ENDPOINT: &str = "/offers/comment/like";

/// What a listing fetch resolved to. Empty is a distinct terminal state,
/// not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Page(PlanPage),
    Empty,
    Failed(String),
}

pub fn like_url(comment_id: u32) -> String {
    format!("{}/{}/", LIKE_ENDPOINT, comment_id)
}

/// Fetch one page of plans. Transport errors, non-2xx statuses and decode
/// failures all collapse into `Failed`.
pub async fn fetch_plans(url: &str) -> PlanOutcome {
    match get_json::<PlanPage>(url).await {
        Ok(page) => classify(page),
        Err(err) => PlanOutcome::Failed(err),
    }
}

/// A zero-count page is a distinct terminal state, not a page of results
fn classify(page: PlanPage) -> PlanOutcome {
    if page.meta.total_count == 0 {
        PlanOutcome::Empty
    } else {
        PlanOutcome::Page(page)
    }
}

/// Toggle the like state of a comment, returning the replacement fragments
pub async fn toggle_like(comment_id: u32) -> Result<LikeFragments, String> {
    get_json(&like_url(comment_id)).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(describe_js_error)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch did not yield a Response".to_string())?;

    if !response.ok() {
        return Err(format!("request failed with status {}", response.status()));
    }

    let body = JsFuture::from(response.json().map_err(describe_js_error)?)
        .await
        .map_err(describe_js_error)?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

fn describe_js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PageMeta, PlanObject};

    fn page(total_count: u64, objects: Vec<PlanObject>) -> PlanPage {
        PlanPage {
            meta: PageMeta {
                total_count,
                limit: 3,
                offset: 0,
                previous: None,
                next: None,
            },
            objects,
        }
    }

    #[test]
    fn like_url_targets_the_comment() {
        assert_eq!(like_url(42), "/offers/comment/like/42/");
    }

    #[test]
    fn zero_count_page_is_empty() {
        assert_eq!(classify(page(0, vec![])), PlanOutcome::Empty);
    }

    #[test]
    fn populated_page_keeps_its_results() {
        let one = PlanObject {
            html: "<div>plan a</div>".to_string(),
        };
        match classify(page(7, vec![one.clone()])) {
            PlanOutcome::Page(got) => assert_eq!(got.objects, vec![one]),
            other => panic!("expected a page, got {:?}", other),
        }
    }
}
