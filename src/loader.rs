use crate::constants::RESUME_URL;
use crate::dom::{self, js_err};
use crate::resume::{Resume, ResumeError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn fetch_resume(window: &web::Window) -> anyhow::Result<Resume> {
    let resp = JsFuture::from(window.fetch_with_str(RESUME_URL))
        .await
        .map_err(js_err)?
        .dyn_into::<web::Response>()
        .map_err(js_err)?;
    if !resp.ok() {
        return Err(ResumeError::Status(resp.status()).into());
    }
    let body = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("response body is not text"))?;
    Ok(Resume::from_json(&body)?)
}

/// Inject every section present in the document into its container. Sections
/// absent from the JSON leave the static markup in place.
pub fn populate(document: &web::Document, resume: &Resume) {
    for (id, html) in resume.sections() {
        if !dom::set_inner_html_by_id(document, id, &html) {
            log::warn!("[resume] missing #{}", id);
        }
    }
}

pub async fn load_and_populate(window: &web::Window, document: &web::Document) {
    match fetch_resume(window).await {
        Ok(resume) => {
            populate(document, &resume);
            log::info!(
                "[resume] loaded {} jobs, {} achievements",
                resume.job_count(),
                resume.achievement_count()
            );
        }
        Err(e) => log::error!("[resume] error loading resume data: {:?}", e),
    }
}
