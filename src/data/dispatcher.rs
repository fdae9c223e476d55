use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::Context;

#[cfg(not(target_arch = "wasm32"))]
use {anyhow::Result, tokio::runtime::Runtime};

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::data::MarketDataProvider;
use crate::engine::{FetchOutcome, FetchRequest};
use crate::utils::AppInstant;

/// Launches fetches without blocking the caller and hands back whatever has completed.
pub trait FetchDispatcher {
    fn dispatch(&mut self, request: FetchRequest);

    /// Next completed fetch, in completion order. Never blocks.
    fn try_recv(&mut self) -> Option<FetchOutcome>;
}

/// Runs each fetch as its own task: on a tokio runtime natively, on the page's event loop in
/// the browser. Completions come back over a channel and wake the UI.
pub struct AsyncDispatcher {
    provider: Arc<dyn MarketDataProvider>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
    repaint: Option<Context>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Runtime,
}

impl AsyncDispatcher {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(provider: Arc<dyn MarketDataProvider>, repaint: Option<Context>) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        Ok(Self {
            provider,
            tx,
            rx,
            repaint,
            runtime: Runtime::new()?,
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(provider: Arc<dyn MarketDataProvider>, repaint: Option<Context>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            provider,
            tx,
            rx,
            repaint,
        }
    }
}

impl FetchDispatcher for AsyncDispatcher {
    fn dispatch(&mut self, request: FetchRequest) {
        let provider = self.provider.clone();
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();

        let task = async move {
            let start = AppInstant::now();
            let result = provider.fetch_market_chart(&request).await;
            let outcome = FetchOutcome::new(request, result, start.elapsed().as_millis());

            #[cfg(debug_assertions)]
            if DF.log_fetches {
                log::info!(
                    "Fetch #{} for {} finished in {}ms",
                    outcome.seq,
                    outcome.selection,
                    outcome.duration_ms
                );
            }

            // Receiver gone means the app is shutting down.
            let _ = tx.send(outcome);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        self.runtime.spawn(task);

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);
    }

    fn try_recv(&mut self) -> Option<FetchOutcome> {
        self.rx.try_recv().ok()
    }
}
