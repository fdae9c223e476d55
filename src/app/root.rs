use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use eframe::{Frame, egui::Context};

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::{
    Cli,
    config::POLLING,
    data::{AsyncDispatcher, CoinGeckoProvider},
    domain::ChartLocale,
    engine::ChartEngine,
    ui::{PlotView, setup_custom_visuals},
    utils::AppInstant,
};

pub struct App {
    pub(crate) engine: ChartEngine<AsyncDispatcher>,
    pub(crate) locale: ChartLocale,
    pub(crate) plot_view: PlotView,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        let provider = Arc::new(CoinGeckoProvider::new(args.api_base()));
        let repaint = Some(cc.egui_ctx.clone());

        #[cfg(not(target_arch = "wasm32"))]
        let dispatcher = AsyncDispatcher::new(provider, repaint)?;
        #[cfg(target_arch = "wasm32")]
        let dispatcher = AsyncDispatcher::new(provider, repaint);

        let selection = args.selection();

        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Starting with {} (locale {})", selection, args.locale());
        }

        let mut engine = ChartEngine::new(selection, args.chart_kind(), dispatcher);
        engine.start(AppInstant::now());

        Ok(Self {
            engine,
            locale: args.locale(),
            plot_view: PlotView::new(),
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        let wait = self
            .engine
            .update(AppInstant::now(), Local::now().timestamp_millis());

        // Order matters: bottom/top panels claim their space before the central panel.
        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        // The status bar counts down every second; the timer needs a frame at its deadline.
        let tick = std::time::Duration::from_secs(1);
        let next = wait.map_or(tick, |w| (w + POLLING.repaint_slack).min(tick));
        ctx.request_repaint_after(next);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.engine.shutdown();
    }
}
