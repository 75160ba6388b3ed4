//! Element planning and anchored insertion into the host DOM.

use crate::core::{data_uri, source};
use crate::domain::model::{
    AssetKind, DeferredFailure, EmbedElement, GistPayload, NodeHandle,
};
use crate::domain::ports::DomHost;
use crate::utils::error::Result;
use regex::Regex;

/// Insertions in document order plus the failures to defer.
#[derive(Debug)]
pub struct InjectionReport {
    pub inserted: Vec<(NodeHandle, EmbedElement)>,
    pub failures: Vec<DeferredFailure>,
}

/// Resolves the asset type of a requested name: a `#css` suffix or a `.css`
/// extension makes it a stylesheet, everything else is a script. The `#js`
/// suffix exists so non-`.js` names force the script path explicitly.
pub fn asset_kind(chosen_name: &str) -> AssetKind {
    let css = Regex::new(r"(?i)[#.]css$").unwrap();
    if css.is_match(chosen_name) {
        AssetKind::Stylesheet
    } else {
        AssetKind::Script
    }
}

/// The name used for matching against the gist's file list: the requested
/// name with any forced-type suffix removed.
pub fn base_name(chosen_name: &str) -> &str {
    match chosen_name.find('#') {
        Some(pos) => &chosen_name[..pos],
        None => chosen_name,
    }
}

/// Processes every chosen file in caller order, independently: a missing file
/// is recorded for deferred reporting and never blocks later files. Each
/// successful insertion chains after the previous one (the invoking element
/// anchors the first), so requested order is preserved on the page.
pub fn inject_all<D: DomHost>(
    dom: &D,
    gist_id: &str,
    payload: &GistPayload,
    chosen_files: &[String],
) -> Result<InjectionReport> {
    let mut inserted: Vec<(NodeHandle, EmbedElement)> = Vec::new();
    let mut failures = Vec::new();

    for chosen_name in chosen_files {
        let index = payload
            .files
            .iter()
            .position(|file| file == base_name(chosen_name));

        let Some(index) = index else {
            tracing::debug!("File \"{}\" not present in gist {}", chosen_name, gist_id);
            failures.push(DeferredFailure::MissingFile {
                file: chosen_name.clone(),
            });
            continue;
        };

        let code = source::reconstruct_source(&payload.div, index)?;
        let kind = asset_kind(chosen_name);
        let element = EmbedElement {
            kind,
            uri: data_uri::encode(kind, &code),
            gist_id: gist_id.to_string(),
            file_name: chosen_name.clone(),
        };

        let anchor = inserted
            .last()
            .map(|(handle, _)| *handle)
            .unwrap_or_else(|| dom.anchor());
        let handle = dom.insert_after(anchor, element.clone())?;
        tracing::debug!("Inserted \"{}\" ({} bytes of source)", chosen_name, code.len());
        inserted.push((handle, element));
    }

    Ok(InjectionReport { inserted, failures })
}
