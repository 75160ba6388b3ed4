//! One-invocation orchestration: parse the script URL, bridge the JSON-P
//! response, select files, reconstruct and inject.

use crate::config;
use crate::core::callback::{self, CallbackRegistry};
use crate::core::{injector, selector};
use crate::domain::model::{DeferredFailure, EmbedOutcome};
use crate::domain::ports::{DomHost, FailureSink, GistSource};
use crate::utils::error::{EmbedError, Result};
use std::sync::Arc;

pub struct GistEmbedder<S: GistSource, D: DomHost, F: FailureSink> {
    source: S,
    dom: D,
    sink: Arc<F>,
}

impl<S: GistSource, D: DomHost, F: FailureSink + 'static> GistEmbedder<S, D, F> {
    pub fn new(source: S, dom: D, sink: F) -> Self {
        Self {
            source,
            dom,
            sink: Arc::new(sink),
        }
    }

    /// The host DOM, for inspecting what an invocation inserted.
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Runs one embedding invocation for the given script URL.
    ///
    /// A missing `gist` parameter and transport/payload failures surface as
    /// `Err` directly. Per-file failures never do: every found file is
    /// inserted first, then each failure is handed to the sink on its own
    /// scheduling turn, and all of them are listed in the returned outcome.
    pub async fn run(&self, script_url: &str) -> Result<EmbedOutcome> {
        let request = config::parse_script_url(script_url)?;
        tracing::info!(
            "Embedding gist {} ({} file(s) requested)",
            request.gist_id,
            request.chosen_files.len()
        );

        let registry = CallbackRegistry::global();
        let token = loop {
            let candidate = callback::callback_token();
            if registry.register(&candidate) {
                break candidate;
            }
        };

        tracing::debug!("Requesting gist {} via callback {}", request.gist_id, token);
        let body = match self.source.fetch(&request.gist_id, &token).await {
            Ok(body) => body,
            Err(e) => {
                // The registration must not outlive a failed request.
                registry.take(&token).ok();
                return Err(e);
            }
        };

        // Single use: deregistering is the first action on response.
        registry.take(&token)?;
        let payload = callback::unwrap_jsonp(&body, &token)?;
        tracing::debug!("Gist {} lists {} file(s)", request.gist_id, payload.files.len());

        let mut failures: Vec<DeferredFailure> = Vec::new();
        let chosen = match selector::choose_files(&payload.files, &request.chosen_files) {
            Ok(chosen) => chosen,
            Err(EmbedError::NoEmbeddableFiles) => {
                failures.push(DeferredFailure::NoEmbeddableFiles);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let report = injector::inject_all(&self.dom, &request.gist_id, &payload, &chosen)?;
        failures.extend(report.failures);
        tracing::info!(
            "Gist {}: {} inserted, {} failed",
            request.gist_id,
            report.inserted.len(),
            failures.len()
        );

        // Every insertion is already done; each failure gets its own turn so
        // none of them can mask another.
        for failure in &failures {
            let sink = Arc::clone(&self.sink);
            let error: EmbedError = failure.clone().into();
            tokio::spawn(async move {
                sink.report(error);
            });
        }

        Ok(EmbedOutcome {
            inserted: report.inserted,
            failures,
        })
    }
}
