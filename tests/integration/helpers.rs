//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use maktabati_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = maktabati_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        maktabati_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = maktabati_api::app::build_state(config.clone(), db_pool.clone())
            .await
            .expect("Failed to build app state");

        let router = maktabati_api::router::build_router(state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "index_records",
            "conversations",
            "files",
            "folders",
            "sections",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Mint a bearer token for a user, signed with the test secret
    pub fn token_for(&self, user_id: Uuid) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = serde_json::json!({
            "sub": user_id,
            "email": format!("{}@test.com", user_id),
            "iat": now,
            "exp": now + 3600,
        });

        jsonwebtoken::encode(
            &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(self.config.auth.jwt_secret.as_bytes()),
        )
        .expect("Failed to sign test token")
    }

    /// Insert a section directly and return its ID
    pub async fn seed_section(&self, owner_id: Uuid, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO sections (id, owner_id, name) VALUES ($1, $2, $3)",
        )
        .bind(id)
        .bind(owner_id)
        .bind(name)
        .execute(&self.db_pool)
        .await
        .expect("Failed to seed section");
        id
    }

    /// Insert a folder directly and return its ID
    pub async fn seed_folder(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO folders (id, owner_id, section_id, name, parent_id) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(owner_id)
        .bind(section_id)
        .bind(name)
        .bind(parent_id)
        .execute(&self.db_pool)
        .await
        .expect("Failed to seed folder");
        id
    }

    /// Insert a file record directly and return its ID
    pub async fn seed_file(
        &self,
        owner_id: Uuid,
        section_id: Uuid,
        name: &str,
        folder_id: Option<Uuid>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO files \
             (id, owner_id, section_id, name, file_url, file_type, file_size, folder_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(id)
        .bind(owner_id)
        .bind(section_id)
        .bind(name)
        .bind(format!("http://localhost/files/{}", name))
        .bind("text/plain")
        .bind(42i64)
        .bind(folder_id)
        .execute(&self.db_pool)
        .await
        .expect("Failed to seed file");
        id
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` payload of a successful envelope
    pub fn data(&self) -> &Value {
        assert_eq!(self.body.get("success"), Some(&Value::Bool(true)));
        self.body.get("data").expect("No data in response")
    }
}
