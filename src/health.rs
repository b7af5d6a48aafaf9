use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// Optional backends checked by `/ready`. Unconfigured backends are reported
/// but never make the service unready.
#[derive(Clone, Default)]
pub struct ReadinessCheck {
    pub db: Option<Arc<DatabaseConnection>>,
    pub redis: Option<Arc<Pool>>,
}

impl ReadinessCheck {
    async fn database_status(&self) -> &'static str {
        let Some(db) = &self.db else {
            return "not_configured";
        };
        match db
            .execute(Statement::from_string(db.get_database_backend(), "SELECT 1"))
            .await
        {
            Ok(_) => "ok",
            Err(_) => "unhealthy",
        }
    }

    async fn redis_status(&self) -> &'static str {
        let Some(pool) = &self.redis else {
            return "not_configured";
        };
        let Ok(mut conn) = pool.get().await else {
            return "unhealthy";
        };
        match deadpool_redis::redis::cmd("PING").query_async::<String>(&mut conn).await {
            Ok(_) => "ok",
            Err(_) => "unhealthy",
        }
    }
}

/// LIVENESS CHECK
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS CHECK
/// - Checks configured backends
#[get("/ready")]
pub async fn readiness(checks: web::Data<ReadinessCheck>) -> impl Responder {
    let database = checks.database_status().await;
    let redis = checks.redis_status().await;

    if database != "unhealthy" && redis != "unhealthy" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database,
            redis,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database,
            redis,
        })
    }
}
