use crate::domain::{
    common::services::Service,
    generation::ports::LLMClient,
    health::{entities::HealthStatus, ports::HealthCheckService},
    recipe::ports::RecipeRepository,
};

impl<RR, LLM> HealthCheckService for Service<RR, LLM>
where
    RR: RecipeRepository,
    LLM: LLMClient,
{
    fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            recipes: self.recipe_repository.count(),
        }
    }
}
