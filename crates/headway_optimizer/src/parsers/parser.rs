use std::path::Path;

use crate::problem::arrival_model::ArrivalModel;

pub trait DatasetParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<ArrivalModel, anyhow::Error>;
}
