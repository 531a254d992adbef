use crate::domain::health::entities::HealthStatus;

pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> HealthStatus;
}
