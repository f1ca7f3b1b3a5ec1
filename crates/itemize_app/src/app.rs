use std::time::Duration;

use eframe::egui;
use itemize_core::{update, AppState, Msg};

use crate::effects::EffectRunner;
use crate::ui;

pub struct InvoiceApp {
    state: AppState,
    effects: EffectRunner,
}

impl InvoiceApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            state: AppState::new(),
            effects: EffectRunner::new(),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
    }
}

impl eframe::App for InvoiceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut inbox = self.effects.poll();

        let view = self.state.view();
        egui::CentralPanel::default().show(ctx, |panel| {
            egui::ScrollArea::vertical().show(panel, |panel| {
                inbox.extend(ui::view(panel, &view));
            });
        });

        for msg in inbox {
            self.dispatch(msg);
        }

        // Engine completions arrive between frames; keep repainting while a
        // request is in flight so they are picked up promptly.
        if self.state.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
