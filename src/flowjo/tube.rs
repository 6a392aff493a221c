use bigdecimal::BigDecimal;

/// One sample tube with its computed counts.
///
/// Percents and counts are index-aligned with the gate catalog. Counts are
/// computed exactly once, when the sample is assembled; ignored ancestor
/// gates carry no count. `group` stays `None` unless grouping mode labels
/// the tube afterwards.
#[derive(Debug, Clone)]
pub struct TubeSample {
    pub name: String,
    pub group: Option<String>,
    pub cell_concentration: BigDecimal,
    pub percents: Vec<BigDecimal>,
    pub counts: Vec<Option<BigDecimal>>,
}

impl TubeSample {
    pub fn new(
        name: String,
        cell_concentration: BigDecimal,
        percents: Vec<BigDecimal>,
        counts: Vec<Option<BigDecimal>>,
    ) -> Self {
        TubeSample {
            name,
            group: None,
            cell_concentration,
            percents,
            counts,
        }
    }
}
