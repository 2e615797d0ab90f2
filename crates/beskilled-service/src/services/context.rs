//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use beskilled_common::auth::JwtService;
use beskilled_core::traits::{
    AdminLogRepository, MessageRepository, PlatformMessageRepository, RatingRepository,
    ReportRepository, SkillRepository, SwapRepository, UserRepository,
};
use beskilled_core::SnowflakeGenerator;
use beskilled_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    skill_repo: Arc<dyn SkillRepository>,
    swap_repo: Arc<dyn SwapRepository>,
    message_repo: Arc<dyn MessageRepository>,
    rating_repo: Arc<dyn RatingRepository>,
    platform_message_repo: Arc<dyn PlatformMessageRepository>,
    admin_log_repo: Arc<dyn AdminLogRepository>,
    report_repo: Arc<dyn ReportRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        skill_repo: Arc<dyn SkillRepository>,
        swap_repo: Arc<dyn SwapRepository>,
        message_repo: Arc<dyn MessageRepository>,
        rating_repo: Arc<dyn RatingRepository>,
        platform_message_repo: Arc<dyn PlatformMessageRepository>,
        admin_log_repo: Arc<dyn AdminLogRepository>,
        report_repo: Arc<dyn ReportRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            skill_repo,
            swap_repo,
            message_repo,
            rating_repo,
            platform_message_repo,
            admin_log_repo,
            report_repo,
            jwt_service,
            snowflake_generator,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the skill repository
    pub fn skill_repo(&self) -> &dyn SkillRepository {
        self.skill_repo.as_ref()
    }

    /// Get the swap repository
    pub fn swap_repo(&self) -> &dyn SwapRepository {
        self.swap_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the rating repository
    pub fn rating_repo(&self) -> &dyn RatingRepository {
        self.rating_repo.as_ref()
    }

    /// Get the platform message repository
    pub fn platform_message_repo(&self) -> &dyn PlatformMessageRepository {
        self.platform_message_repo.as_ref()
    }

    /// Get the admin log repository
    pub fn admin_log_repo(&self) -> &dyn AdminLogRepository {
        self.admin_log_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> beskilled_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    skill_repo: Option<Arc<dyn SkillRepository>>,
    swap_repo: Option<Arc<dyn SwapRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    rating_repo: Option<Arc<dyn RatingRepository>>,
    platform_message_repo: Option<Arc<dyn PlatformMessageRepository>>,
    admin_log_repo: Option<Arc<dyn AdminLogRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn skill_repo(mut self, repo: Arc<dyn SkillRepository>) -> Self {
        self.skill_repo = Some(repo);
        self
    }

    pub fn swap_repo(mut self, repo: Arc<dyn SwapRepository>) -> Self {
        self.swap_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn rating_repo(mut self, repo: Arc<dyn RatingRepository>) -> Self {
        self.rating_repo = Some(repo);
        self
    }

    pub fn platform_message_repo(mut self, repo: Arc<dyn PlatformMessageRepository>) -> Self {
        self.platform_message_repo = Some(repo);
        self
    }

    pub fn admin_log_repo(mut self, repo: Arc<dyn AdminLogRepository>) -> Self {
        self.admin_log_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.skill_repo
                .ok_or_else(|| ServiceError::validation("skill_repo is required"))?,
            self.swap_repo
                .ok_or_else(|| ServiceError::validation("swap_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.rating_repo
                .ok_or_else(|| ServiceError::validation("rating_repo is required"))?,
            self.platform_message_repo
                .ok_or_else(|| ServiceError::validation("platform_message_repo is required"))?,
            self.admin_log_repo
                .ok_or_else(|| ServiceError::validation("admin_log_repo is required"))?,
            self.report_repo
                .ok_or_else(|| ServiceError::validation("report_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
