//! Protein search screen

use std::sync::Arc;

use bio_core::{Protein, ProteinCatalog, SearchMode, SearchOrchestrator};
use egui::Ui;

use crate::columns::{search_result_columns, search_result_row_key};
use crate::table::{TableAction, TableView};

/// Action bubbled up to the router.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    OpenProtein(String),
}

/// Search page: mode toggle, query form, result table.
pub struct SearchScreen {
    orchestrator: SearchOrchestrator,
    results_table: TableView<Protein>,
}

impl SearchScreen {
    pub fn new(catalog: Arc<dyn ProteinCatalog>, runtime: tokio::runtime::Handle) -> Self {
        Self {
            orchestrator: SearchOrchestrator::new(catalog, runtime),
            results_table: TableView::new(
                "search_results",
                search_result_columns(),
                search_result_row_key,
            ),
        }
    }

    /// Whether a search request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.orchestrator.fetch_state().is_loading()
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Option<ScreenAction> {
        let mut action = None;

        ui.heading("Protein Information Search");
        ui.add_space(8.0);

        let mode = self.orchestrator.mode();
        ui.horizontal(|ui| {
            if ui
                .selectable_label(mode == SearchMode::Protein, "Search by Protein")
                .clicked()
            {
                self.orchestrator.switch_mode(SearchMode::Protein);
            }
            if ui
                .selectable_label(mode == SearchMode::GoTerm, "Search by GO Term")
                .clicked()
            {
                self.orchestrator.switch_mode(SearchMode::GoTerm);
            }
        });
        ui.add_space(4.0);

        let fetch = self.orchestrator.fetch_state();
        let loading = fetch.is_loading();

        ui.horizontal(|ui| {
            let hint = match self.orchestrator.mode() {
                SearchMode::Protein => "Search for proteins by UUID or accession...",
                SearchMode::GoTerm => {
                    "Enter exact GO term UUID (e.g., BiologicalProcess::1a2d5350-...)"
                }
            };
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.orchestrator.query)
                    .hint_text(hint)
                    .desired_width(420.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let label = if loading { "Searching..." } else { "Search" };
            if ui.add_enabled(!loading, egui::Button::new(label)).clicked() || submitted {
                self.orchestrator.submit();
            }
        });

        if self.orchestrator.mode() == SearchMode::GoTerm {
            ui.add_space(4.0);
            let slider_text = format!("Minimum Score: {:.2}", self.orchestrator.min_score);
            ui.add(
                egui::Slider::new(&mut self.orchestrator.min_score, 0.0..=1.0)
                    .step_by(0.05)
                    .text(slider_text),
            );
            ui.small("Higher values will return proteins with stronger associations to the GO term.");
        }

        ui.add_space(8.0);

        match &fetch {
            bio_core::FetchState::Failed(message) => {
                bio_ui::error_banner(ui, message);
            }
            bio_core::FetchState::Ready(proteins) => {
                if proteins.is_empty() {
                    bio_ui::empty_notice(ui, "No proteins found. Try a different search term.");
                } else {
                    ui.strong("Search Results");
                    ui.add_space(4.0);
                    if let Some(TableAction::OpenProtein(id)) =
                        self.results_table.ui(ui, proteins)
                    {
                        action = Some(ScreenAction::OpenProtein(id));
                    }
                }
            }
            bio_core::FetchState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Searching...");
                });
            }
            bio_core::FetchState::Idle => {}
        }

        action
    }
}
