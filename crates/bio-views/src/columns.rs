//! Column declarations for the three record tables

use bio_core::{display_or, resolve_score, FunctionalAnnotation, Protein, ProteinInteraction};

use crate::table::{Accessor, CellValue, Column};

pub fn search_result_columns() -> Vec<Column<Protein>> {
    vec![
        Column {
            header: "Accession Number",
            accessor: Accessor::Projection(|protein: &Protein| {
                CellValue::Text(display_or(protein.name.as_deref()))
            }),
        },
        Column {
            header: "ID",
            accessor: Accessor::Field(|protein: &Protein| Some(protein.id.clone())),
        },
        Column {
            header: "External ID",
            accessor: Accessor::Field(|protein: &Protein| protein.external_id.clone()),
        },
        Column {
            header: "Organism",
            accessor: Accessor::Projection(|protein: &Protein| {
                CellValue::Text(display_or(
                    protein
                        .organism_name
                        .as_deref()
                        .or(protein.organism.as_deref()),
                ))
            }),
        },
        Column {
            header: "Actions",
            accessor: Accessor::Projection(|protein: &Protein| CellValue::Link {
                label: "View Protein".to_string(),
                protein_id: protein.id.clone(),
            }),
        },
    ]
}

pub fn search_result_row_key(protein: &Protein, index: usize) -> String {
    format!("{}-{}", protein.id, index)
}

pub fn annotation_columns() -> Vec<Column<FunctionalAnnotation>> {
    vec![
        Column {
            header: "GO Term ID",
            accessor: Accessor::Field(|a: &FunctionalAnnotation| Some(a.go_term_id.clone())),
        },
        Column {
            header: "GO Term Name",
            accessor: Accessor::Field(|a: &FunctionalAnnotation| a.go_term_name.clone()),
        },
        Column {
            header: "GO Code",
            accessor: Accessor::Field(|a: &FunctionalAnnotation| a.go_code.clone()),
        },
        Column {
            header: "Score",
            accessor: Accessor::Projection(|a: &FunctionalAnnotation| {
                CellValue::Text(display_or(resolve_score(
                    a.ml_prediction_score,
                    a.string_combined_score,
                )))
            }),
        },
    ]
}

pub fn annotation_row_key(annotation: &FunctionalAnnotation, index: usize) -> String {
    format!("{}-{}", annotation.go_term_id, index)
}

pub fn interaction_columns() -> Vec<Column<ProteinInteraction>> {
    vec![
        Column {
            header: "Target Name",
            accessor: Accessor::Field(|i: &ProteinInteraction| i.target_protein_name.clone()),
        },
        Column {
            header: "Target ID",
            accessor: Accessor::Field(|i: &ProteinInteraction| Some(i.target_protein_id.clone())),
        },
        Column {
            header: "Score",
            accessor: Accessor::Projection(|i: &ProteinInteraction| {
                CellValue::Text(display_or(resolve_score(
                    i.ml_prediction_score,
                    i.string_combined_score,
                )))
            }),
        },
        Column {
            header: "Actions",
            accessor: Accessor::Projection(|i: &ProteinInteraction| CellValue::Link {
                label: "View Protein".to_string(),
                protein_id: i.target_protein_id.clone(),
            }),
        },
    ]
}

pub fn interaction_row_key(interaction: &ProteinInteraction, index: usize) -> String {
    format!("{}-{}", interaction.target_protein_id, index)
}
