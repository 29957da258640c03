//! Demo catalog for running without the backend
//!
//! A small curated protein set served from memory, with the same search and
//! filtering semantics the remote API exposes. Enabled with `--demo`.

use bio_core::{
    resolve_score, ApiError, FunctionalAnnotation, Protein, ProteinCatalog, ProteinInteraction,
};

pub struct DemoCatalog {
    proteins: Vec<Protein>,
    annotations: Vec<FunctionalAnnotation>,
    interactions: Vec<ProteinInteraction>,
}

fn protein(
    id: &str,
    name: &str,
    external_id: &str,
    organism: &str,
    organism_name: &str,
    sequence: &str,
    secondary_ids: &[&str],
) -> Protein {
    Protein {
        id: id.to_string(),
        uuid: None,
        name: Some(name.to_string()),
        external_id: Some(external_id.to_string()),
        protein_sequence: Some(sequence.to_string()),
        dataset: Some("demo".to_string()),
        organism: Some(organism.to_string()),
        organism_name: Some(organism_name.to_string()),
        node_type: Some("protein".to_string()),
        date: None,
        secondary_ids: secondary_ids.iter().map(|s| s.to_string()).collect(),
        ambiguous_secondary_ids: Vec::new(),
    }
}

fn annotation(
    protein_id: &str,
    go_term_id: &str,
    go_term_name: &str,
    go_code: &str,
    ml_score: Option<f64>,
    string_score: Option<f64>,
) -> FunctionalAnnotation {
    FunctionalAnnotation {
        protein_id: protein_id.to_string(),
        go_term_id: go_term_id.to_string(),
        go_term_name: Some(go_term_name.to_string()),
        go_code: Some(go_code.to_string()),
        ml_prediction_score: ml_score,
        string_combined_score: string_score,
        dataset: Some("demo".to_string()),
        date: None,
    }
}

fn interaction(
    source: &str,
    target: &str,
    target_name: &str,
    ml_score: Option<f64>,
    string_score: Option<f64>,
) -> ProteinInteraction {
    ProteinInteraction {
        source_protein_id: source.to_string(),
        target_protein_id: target.to_string(),
        target_protein_name: Some(target_name.to_string()),
        ml_prediction_score: ml_score,
        string_combined_score: string_score,
        dataset: Some("demo".to_string()),
        date: None,
    }
}

impl DemoCatalog {
    pub fn new() -> Self {
        let proteins = vec![
            protein(
                "P0A6Y8",
                "DNAK_ECOLI",
                "b0014",
                "83333",
                "Escherichia coli K-12",
                "MGKIIGIDLGTTNSCVAIMDGTTPRVLENAEGDRTTPSIIAYTQDGETLVGQPAKRQAVTNPQNTLFAIKRLIGRRFQDEEVQRDVSIMPFKIIAADNGDAWVEVKGQKMAPPQISAEVLKKMKKTAEDYLGEPVTEAVITVPAYFNDAQRQATKDAGRIAGLEVKRIINEPTAAALAYGLDKG",
                &["P04475"],
            ),
            protein(
                "P0A6F5",
                "CH60_ECOLI",
                "b4143",
                "83333",
                "Escherichia coli K-12",
                "MAAKDVKFGNDARVKMLRGVNVLADAVKVTLGPKGRNVVLDKSFGAPTITKDGVSVAREIELEDKFENMGAQMVKEVASKANDAAGDGTTTATVLAQAIITEGLKAVAAGMNPMDLKRGIDKAVTAAVEELKALSVPCSDSKAIAQVGTISANSDETVGKLIAEAMDKVGKEGVITVEDGTGLQDE",
                &[],
            ),
            protein(
                "P38646",
                "GRP75_HUMAN",
                "HSPA9",
                "9606",
                "Homo sapiens",
                "MISASRAAAARLVGAAASRGPTAARHQDSWNGLSHEAFRLVSRRDYASEAIKGAVVGIDLGTTNSCVAVMEGKQAKVLENAEGARTTPSVVAFTADGERLVGMPAKRQAVTNPNNTFYATKRLIGRRYDDPEVQKDIKNVPFKIVRASNGDAWVEAHGKLYSPSQIGAFVLMKMKETAENYLGHTAKNAVITVPAYFNDSQRQATKDAGQISGLNVLRVINEPTAAALAYGLDKS",
                &["Q9NPL4"],
            ),
            protein(
                "P11021",
                "BIP_HUMAN",
                "HSPA5",
                "9606",
                "Homo sapiens",
                "MKLSLVAAMLLLLSAARAEEEDKKEDVGTVVGIDLGTTYSCVGVFKNGRVEIIANDQGNRITPSYVAFTPEGERLIGDAAKNQLTSNPENTVFDAKRLIGRTWNDPSVQQDIKFLPFKVVEKKTKPYIQVDIGGGQTKTFAPEEISAMVLTKMKETAEAYLGKKVTHAVVTVPAYFNDAQRQATKDAGTIAGLNVMRIINEPTAAAIAYGLDKR",
                &[],
            ),
        ];

        let annotations = vec![
            annotation(
                "P0A6Y8",
                "GO:0006457",
                "protein folding",
                "IDA",
                Some(0.97),
                Some(0.91),
            ),
            annotation(
                "P0A6Y8",
                "GO:0005524",
                "ATP binding",
                "IEA",
                None,
                Some(0.88),
            ),
            annotation(
                "P38646",
                "GO:0006457",
                "protein folding",
                "IBA",
                Some(0.8),
                None,
            ),
            annotation(
                "P38646",
                "GO:0005739",
                "mitochondrion",
                "IDA",
                Some(0.0),
                Some(0.95),
            ),
            annotation(
                "P11021",
                "GO:0006457",
                "protein folding",
                "IDA",
                Some(0.64),
                Some(0.9),
            ),
        ];

        let interactions = vec![
            interaction("P0A6Y8", "P0A6F5", "CH60_ECOLI", Some(0.93), Some(0.99)),
            interaction("P38646", "P11021", "BIP_HUMAN", None, Some(0.72)),
            interaction("P11021", "P38646", "GRP75_HUMAN", None, Some(0.72)),
        ];

        Self {
            proteins,
            annotations,
            interactions,
        }
    }

    fn matches(protein: &Protein, needle: &str) -> bool {
        let hit = |value: &str| value.to_lowercase().contains(needle);
        hit(&protein.id)
            || protein.name.as_deref().is_some_and(hit)
            || protein.external_id.as_deref().is_some_and(hit)
            || protein.secondary_ids.iter().any(|id| hit(id))
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProteinCatalog for DemoCatalog {
    async fn search_proteins(&self, query: &str, limit: usize) -> Result<Vec<Protein>, ApiError> {
        let needle = query.to_lowercase();
        Ok(self
            .proteins
            .iter()
            .filter(|protein| Self::matches(protein, &needle))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn proteins_by_go_term(
        &self,
        go_term_id: &str,
        min_score: f64,
        limit: usize,
    ) -> Result<Vec<Protein>, ApiError> {
        // Threshold is inclusive: a score exactly at min_score qualifies.
        let ids: Vec<&str> = self
            .annotations
            .iter()
            .filter(|a| a.go_term_id == go_term_id)
            .filter(|a| {
                resolve_score(a.ml_prediction_score, a.string_combined_score)
                    .is_some_and(|score| score >= min_score)
            })
            .map(|a| a.protein_id.as_str())
            .collect();
        Ok(self
            .proteins
            .iter()
            .filter(|protein| ids.contains(&protein.id.as_str()))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn protein(&self, protein_id: &str) -> Result<Protein, ApiError> {
        self.proteins
            .iter()
            .find(|protein| protein.id == protein_id)
            .cloned()
            .ok_or(ApiError::Status(404))
    }

    async fn functional_annotations(
        &self,
        protein_id: &str,
    ) -> Result<Vec<FunctionalAnnotation>, ApiError> {
        Ok(self
            .annotations
            .iter()
            .filter(|a| a.protein_id == protein_id)
            .cloned()
            .collect())
    }

    async fn interactions(&self, protein_id: &str) -> Result<Vec<ProteinInteraction>, ApiError> {
        Ok(self
            .interactions
            .iter()
            .filter(|i| i.source_protein_id == protein_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_is_case_insensitive_over_ids_and_names() {
        let catalog = DemoCatalog::new();
        let hits = catalog.search_proteins("dnak", 10).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "P0A6Y8");

        let by_secondary = catalog.search_proteins("q9npl4", 10).await.unwrap();
        assert_eq!(by_secondary[0].id, "P38646");
    }

    #[tokio::test]
    async fn go_term_threshold_is_inclusive() {
        let catalog = DemoCatalog::new();
        // P38646's folding annotation scores exactly 0.8.
        let at_threshold = catalog
            .proteins_by_go_term("GO:0006457", 0.8, 10)
            .await
            .unwrap();
        assert!(at_threshold.iter().any(|p| p.id == "P38646"));

        let above = catalog
            .proteins_by_go_term("GO:0006457", 0.81, 10)
            .await
            .unwrap();
        assert!(!above.iter().any(|p| p.id == "P38646"));
    }

    #[tokio::test]
    async fn zero_ml_score_shadows_the_string_score() {
        let catalog = DemoCatalog::new();
        // The mitochondrion annotation has ML score 0.0 and STRING 0.95;
        // the resolved score is 0.0, so a 0.5 threshold excludes it.
        let hits = catalog
            .proteins_by_go_term("GO:0005739", 0.5, 10)
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn unknown_protein_is_a_status_error() {
        let catalog = DemoCatalog::new();
        assert_eq!(
            catalog.protein("NOPE").await.unwrap_err(),
            ApiError::Status(404)
        );
    }
}
