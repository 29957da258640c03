//! Protein detail screen

use std::sync::Arc;

use bio_core::{
    display_or, DetailAggregate, DetailOrchestrator, DetailPhase, DetailTab, FetchState,
    FunctionalAnnotation, Protein, ProteinCatalog, ProteinInteraction,
};
use egui::Ui;

use crate::columns::{
    annotation_columns, annotation_row_key, interaction_columns, interaction_row_key,
};
use crate::table::{TableAction, TableView};

/// Action bubbled up to the router.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailAction {
    BackToSearch,
    OpenProtein(String),
}

/// Detail page for one protein: meta panel plus the four tab sections.
pub struct DetailScreen {
    orchestrator: DetailOrchestrator,
    annotations_table: TableView<FunctionalAnnotation>,
    interactions_table: TableView<ProteinInteraction>,
}

impl DetailScreen {
    /// Build the screen and immediately fetch everything it needs.
    pub fn new(
        catalog: Arc<dyn ProteinCatalog>,
        runtime: tokio::runtime::Handle,
        protein_id: impl Into<String>,
    ) -> Self {
        let mut orchestrator = DetailOrchestrator::new(catalog, runtime);
        orchestrator.load(protein_id);
        Self {
            orchestrator,
            annotations_table: TableView::new(
                "annotations",
                annotation_columns(),
                annotation_row_key,
            ),
            interactions_table: TableView::new(
                "interactions",
                interaction_columns(),
                interaction_row_key,
            ),
        }
    }

    pub fn protein_id(&self) -> &str {
        self.orchestrator.protein_id()
    }

    /// Whether any slice is still in flight.
    pub fn is_loading(&self) -> bool {
        self.orchestrator.snapshot().phase() == DetailPhase::Loading
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Option<DetailAction> {
        let mut action = None;

        if ui.link("← Back to Search").clicked() {
            action = Some(DetailAction::BackToSearch);
        }
        ui.add_space(4.0);

        let snapshot = self.orchestrator.snapshot();
        match snapshot.phase() {
            DetailPhase::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(64.0);
                    ui.spinner();
                    ui.label("Loading...");
                });
            }
            DetailPhase::Blocked(message) => {
                bio_ui::error_banner(ui, &message);
            }
            DetailPhase::Ready => {
                if let Some(protein) = snapshot.protein.ready() {
                    let protein = protein.clone();
                    self.ready_ui(ui, &protein, &snapshot, &mut action);
                }
            }
        }

        action
    }

    fn ready_ui(
        &mut self,
        ui: &mut Ui,
        protein: &Protein,
        snapshot: &DetailAggregate,
        action: &mut Option<DetailAction>,
    ) {
        ui.heading(
            protein
                .name
                .as_deref()
                .unwrap_or("Unnamed Protein"),
        );
        ui.label(protein.organism_label());
        ui.add_space(8.0);

        meta_panel(ui, protein);
        ui.add_space(8.0);

        let annotation_count = snapshot.annotations.ready().map_or(0, Vec::len);
        let interaction_count = snapshot.interactions.ready().map_or(0, Vec::len);
        ui.horizontal(|ui| {
            for tab in DetailTab::ALL {
                let title = tab_title(tab, annotation_count, interaction_count);
                if ui
                    .selectable_label(self.orchestrator.active_tab == tab, title)
                    .clicked()
                {
                    // Tab switches only reveal already-fetched slices.
                    self.orchestrator.active_tab = tab;
                }
            }
        });
        ui.separator();

        match self.orchestrator.active_tab {
            DetailTab::Overview => overview_tab(ui, protein),
            DetailTab::Sequence => sequence_tab(ui, protein),
            DetailTab::Annotations => {
                self.annotations_tab(ui, &snapshot.annotations);
            }
            DetailTab::Interactions => {
                if let Some(open) = self.interactions_tab(ui, &snapshot.interactions) {
                    *action = Some(open);
                }
            }
        }
    }

    fn annotations_tab(&mut self, ui: &mut Ui, slice: &FetchState<Vec<FunctionalAnnotation>>) {
        ui.strong("Functional Annotations");
        ui.add_space(4.0);
        match slice {
            FetchState::Failed(message) => bio_ui::error_banner(ui, message),
            FetchState::Ready(annotations) if annotations.is_empty() => {
                bio_ui::empty_notice(ui, "No annotations available.");
            }
            FetchState::Ready(annotations) => {
                self.annotations_table.ui(ui, annotations);
            }
            FetchState::Idle | FetchState::Loading => {
                ui.spinner();
            }
        }
    }

    fn interactions_tab(
        &mut self,
        ui: &mut Ui,
        slice: &FetchState<Vec<ProteinInteraction>>,
    ) -> Option<DetailAction> {
        ui.strong("Protein-Protein Interactions");
        ui.add_space(4.0);
        match slice {
            FetchState::Failed(message) => {
                bio_ui::error_banner(ui, message);
                None
            }
            FetchState::Ready(interactions) if interactions.is_empty() => {
                bio_ui::empty_notice(ui, "No interactions found.");
                None
            }
            FetchState::Ready(interactions) => {
                match self.interactions_table.ui(ui, interactions) {
                    Some(TableAction::OpenProtein(id)) => Some(DetailAction::OpenProtein(id)),
                    None => None,
                }
            }
            FetchState::Idle | FetchState::Loading => {
                ui.spinner();
                None
            }
        }
    }
}

fn tab_title(tab: DetailTab, annotation_count: usize, interaction_count: usize) -> String {
    match tab {
        DetailTab::Overview => "Overview".to_string(),
        DetailTab::Sequence => "Sequence".to_string(),
        DetailTab::Annotations => format!("Functional Annotations ({annotation_count})"),
        DetailTab::Interactions => format!("Interactions ({interaction_count})"),
    }
}

fn meta_panel(ui: &mut Ui, protein: &Protein) {
    egui::Grid::new("protein_meta")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            meta_item(ui, "ID", Some(protein.id.as_str()));
            ui.end_row();
            meta_item(ui, "External ID", protein.external_id.as_deref());
            ui.end_row();
            meta_item(ui, "Dataset", protein.dataset.as_deref());
            ui.end_row();
            if !protein.secondary_ids.is_empty() {
                meta_item(ui, "Secondary IDs", Some(protein.secondary_ids.join(", ")));
                ui.end_row();
            }
            if !protein.ambiguous_secondary_ids.is_empty() {
                meta_item(
                    ui,
                    "Ambiguous Secondary IDs",
                    Some(protein.ambiguous_secondary_ids.join(", ")),
                );
                ui.end_row();
            }
        });
}

fn meta_item(ui: &mut Ui, label: &str, value: Option<impl std::fmt::Display>) {
    ui.strong(label);
    ui.label(display_or(value));
}

fn overview_tab(ui: &mut Ui, protein: &Protein) {
    ui.strong("Protein Overview");
    ui.add_space(4.0);
    ui.label(format!(
        "This page displays detailed information about the protein {}.",
        protein.display_name()
    ));
    ui.label("Use the tabs above to view the sequence, annotations, and interactions.");
}

fn sequence_tab(ui: &mut Ui, protein: &Protein) {
    ui.strong("Protein Sequence");
    ui.add_space(4.0);
    match protein.protein_sequence.as_deref() {
        Some(sequence) if !sequence.is_empty() => {
            egui::ScrollArea::vertical()
                .id_source("protein_sequence")
                .max_height(240.0)
                .show(ui, |ui| {
                    ui.monospace(sequence);
                });
            ui.small(format!("Length: {} amino acids", sequence.chars().count()));
        }
        _ => {
            ui.label("No sequence data available for this protein.");
        }
    }
}
