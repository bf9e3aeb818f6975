//! Shared test support for the wrapcal workspace
//!
//! Scripted analyzer/generator capabilities, a recording progress observer,
//! and fixture helpers. Test-only; never ships in a production dependency
//! graph.

#![warn(unreachable_pub)]
#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use wrapcal_image::{DataUri, MediaType};
use wrapcal_pipeline::{MonthInput, ProgressObserver, ProgressSnapshot};
use wrapcal_provider::{
    AnalysisError, AnalysisReply, AnalysisRequest, GenerationError, GenerationReply,
    GenerationRequest, ImageGenerator, SceneAnalyzer,
};

/// Encode raw bytes as a `image/png` data URI
#[must_use]
pub fn png_uri(bytes: &[u8]) -> DataUri {
    let png = MediaType::new("image/png").expect("valid media type");
    DataUri::encode(bytes, &png)
}

/// Twelve text-described month inputs, "Jan" through "Dec"
#[must_use]
pub fn twelve_months() -> Vec<MonthInput> {
    [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
    .iter()
    .map(|name| MonthInput::text(*name, format!("a scene for {name}")))
    .collect()
}

/// Analyzer that replays a fixed script of replies, recording every request
pub struct ScriptedAnalyzer {
    script: Mutex<VecDeque<Result<String, AnalysisError>>>,
    calls: Mutex<Vec<AnalysisRequest>>,
    log: Option<Arc<Mutex<Vec<String>>>>,
}

impl ScriptedAnalyzer {
    /// Script the given replies, consumed in order
    #[must_use]
    pub fn replying(script: Vec<Result<&str, AnalysisError>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().map(|r| r.map(str::to_string)).collect()),
            calls: Mutex::new(Vec::new()),
            log: None,
        }
    }

    /// Analyzer that replies with the same instruction to every request
    #[must_use]
    pub fn always(instruction: &str, times: usize) -> Self {
        Self::replying(vec![Ok(instruction); times])
    }

    /// Also append `analyze:{call_index}` entries to a shared log
    #[must_use]
    pub fn with_log(mut self, log: Arc<Mutex<Vec<String>>>) -> Self {
        self.log = Some(log);
        self
    }

    /// Requests seen so far, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<AnalysisRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl SceneAnalyzer for ScriptedAnalyzer {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReply, AnalysisError> {
        let call_index = {
            let mut calls = self.calls.lock().expect("calls lock");
            calls.push(request);
            calls.len() - 1
        };
        if let Some(log) = &self.log {
            log.lock()
                .expect("log lock")
                .push(format!("analyze:{call_index}"));
        }
        let reply = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .expect("scripted analyzer ran out of replies");
        reply.map(|instruction| AnalysisReply { instruction })
    }
}

/// Generator that replays a fixed script of replies, recording every request
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Result<DataUri, GenerationError>>>,
    calls: Mutex<Vec<GenerationRequest>>,
    log: Option<Arc<Mutex<Vec<String>>>>,
}

impl ScriptedGenerator {
    /// Script the given replies, consumed in order
    #[must_use]
    pub fn replying(script: Vec<Result<DataUri, GenerationError>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
            log: None,
        }
    }

    /// Generator that replies with the same image to every request
    #[must_use]
    pub fn always(image: &DataUri, times: usize) -> Self {
        Self::replying(vec![Ok(image.clone()); times])
    }

    /// Also append `generate:{call_index}` entries to a shared log
    #[must_use]
    pub fn with_log(mut self, log: Arc<Mutex<Vec<String>>>) -> Self {
        self.log = Some(log);
        self
    }

    /// Requests seen so far, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl ImageGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationReply, GenerationError> {
        let call_index = {
            let mut calls = self.calls.lock().expect("calls lock");
            calls.push(request);
            calls.len() - 1
        };
        if let Some(log) = &self.log {
            log.lock()
                .expect("log lock")
                .push(format!("generate:{call_index}"));
        }
        let reply = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .expect("scripted generator ran out of replies");
        reply.map(|image| GenerationReply { image })
    }
}

/// Observer that records every snapshot it sees
#[derive(Default)]
pub struct RecordingObserver {
    snapshots: Mutex<Vec<ProgressSnapshot>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots seen so far, in call order
    #[must_use]
    pub fn snapshots(&self) -> Vec<ProgressSnapshot> {
        self.snapshots.lock().expect("snapshots lock").clone()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_progress(&self, snapshot: ProgressSnapshot) {
        self.snapshots
            .lock()
            .expect("snapshots lock")
            .push(snapshot);
    }
}
