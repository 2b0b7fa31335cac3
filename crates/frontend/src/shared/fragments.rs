//! Fragment loading for dashboard sections.
//!
//! Each section's static markup lives in its own resource under
//! `sections/`; the host fetches it on demand and swaps it into the shared
//! content container. Transport failures and non-success responses are
//! deliberately collapsed into one error shape; at this layer nothing
//! useful distinguishes them.

use contracts::sections::Section;
use gloo_net::http::Request;

pub async fn load_fragment(section: Section) -> Result<String, String> {
    let response = Request::get(section.fragment_path())
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read fragment body: {}", e))
}
