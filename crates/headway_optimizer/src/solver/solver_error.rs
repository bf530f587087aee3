use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Invalid solver parameters: {0}")]
    InvalidParams(String),

    #[error("Failed to build the evaluation thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Genome evaluation failed: {0}")]
    Evaluation(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Search finished without any individual")]
    EmptyHallOfFame,
}
