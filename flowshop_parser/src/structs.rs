#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowShopInstance {
    // block header, e.g. `data.000`
    pub name: String,
    // skipped dimension line, kept for diagnostics
    pub dimension_line: String,
    // one row per job, one column per machine
    pub processing_times: Vec<Vec<u64>>,
}

impl FlowShopInstance {
    pub fn jobs(&self) -> usize {
        self.processing_times.len()
    }
}
