use headway_optimizer::solver::solver_params::SolverParams;
use tracing::warn;

pub struct AppState {
    pub solver_params: SolverParams,
}

impl AppState {
    pub fn from_env() -> Self {
        AppState::with_generations(std::env::var("HEADWAY_GENERATIONS").ok().as_deref())
    }

    fn with_generations(generations: Option<&str>) -> Self {
        let mut solver_params = SolverParams::default();

        match generations.map(str::parse::<usize>) {
            Some(Ok(generations)) => solver_params.generations = generations,
            Some(Err(error)) => warn!("Ignoring HEADWAY_GENERATIONS: {error}"),
            None => {}
        }

        AppState { solver_params }
    }
}
