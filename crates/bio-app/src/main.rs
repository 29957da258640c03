//! Main application entry point

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use bio_api::ApiClient;
use bio_core::ProteinCatalog;
use bio_ui::Theme;
use bio_views::{DetailAction, DetailScreen, ScreenAction, SearchScreen};

mod demo;

/// Which page is on screen; the in-app stand-in for the browser router.
enum Route {
    Search,
    Protein { id: String },
}

/// Navigation intent collected while rendering, applied after the borrow of
/// the current route ends.
enum Nav {
    Open(String),
    Back,
}

struct BiographicaApp {
    route: Route,
    search_screen: SearchScreen,
    detail_screen: Option<DetailScreen>,
    catalog: Arc<dyn ProteinCatalog>,
    catalog_label: String,

    /// Tokio runtime driving the catalog requests
    runtime: tokio::runtime::Runtime,
}

impl BiographicaApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: Arc<dyn ProteinCatalog>,
        catalog_label: String,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        bio_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let search_screen = SearchScreen::new(catalog.clone(), runtime.handle().clone());

        Self {
            route: Route::Search,
            search_screen,
            detail_screen: None,
            catalog,
            catalog_label,
            runtime,
        }
    }

    /// Navigate to a protein's detail page, issuing its fetches.
    fn open_protein(&mut self, id: String) {
        info!(%id, "opening protein detail");
        self.detail_screen = Some(DetailScreen::new(
            self.catalog.clone(),
            self.runtime.handle().clone(),
            id.clone(),
        ));
        self.route = Route::Protein { id };
    }

    fn anything_loading(&self) -> bool {
        match self.route {
            Route::Search => self.search_screen.is_loading(),
            Route::Protein { .. } => self
                .detail_screen
                .as_ref()
                .is_some_and(DetailScreen::is_loading),
        }
    }
}

impl eframe::App for BiographicaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        bio_ui::header_bar(ctx, &self.catalog_label);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("page_scroll")
                .show(ui, |ui| {
                    let mut nav = None;
                    match &self.route {
                        Route::Search => {
                            if let Some(ScreenAction::OpenProtein(id)) = self.search_screen.ui(ui)
                            {
                                nav = Some(Nav::Open(id));
                            }
                        }
                        Route::Protein { id } => {
                            // Re-key the detail screen if the route changed
                            // underneath it.
                            let keyed = self
                                .detail_screen
                                .as_ref()
                                .is_some_and(|screen| screen.protein_id() == id.as_str());
                            if !keyed {
                                self.detail_screen = Some(DetailScreen::new(
                                    self.catalog.clone(),
                                    self.runtime.handle().clone(),
                                    id.clone(),
                                ));
                            }
                            let action = self
                                .detail_screen
                                .as_mut()
                                .and_then(|screen| screen.ui(ui));
                            match action {
                                Some(DetailAction::BackToSearch) => nav = Some(Nav::Back),
                                Some(DetailAction::OpenProtein(id)) => nav = Some(Nav::Open(id)),
                                None => {}
                            }
                        }
                    }
                    match nav {
                        Some(Nav::Open(id)) => self.open_protein(id),
                        Some(Nav::Back) => {
                            self.detail_screen = None;
                            self.route = Route::Search;
                        }
                        None => {}
                    }
                });
        });

        // Background request completions land outside the frame loop; keep
        // repainting while anything is in flight so they become visible.
        if self.anything_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let demo_mode = std::env::args().any(|arg| arg == "--demo");
    let runtime = tokio::runtime::Runtime::new()?;

    let (catalog, catalog_label): (Arc<dyn ProteinCatalog>, String) = if demo_mode {
        info!("starting with in-process demo catalog");
        (Arc::new(demo::DemoCatalog::new()), "demo data".to_string())
    } else {
        let client = ApiClient::new();
        info!(base_url = client.base_url(), "starting against remote catalog");
        let label = client.base_url().to_string();
        (Arc::new(client), label)
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Biographica",
        options,
        Box::new(move |cc| Box::new(BiographicaApp::new(cc, catalog, catalog_label, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
