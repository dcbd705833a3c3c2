use anyhow::{Context, Result};
use gcloud_gax::grpc::Code;
use gcloud_googleapis::spanner::admin::database::v1::{
    CreateDatabaseRequest, GetDatabaseDdlRequest, GetDatabaseRequest, UpdateDatabaseDdlRequest,
};
use gcloud_googleapis::spanner::admin::instance::v1::{
    CreateInstanceRequest, GetInstanceRequest, Instance,
};
use gcloud_spanner::admin::client::Client as AdminClient;
use gcloud_spanner::admin::AdminClientConfig;
use gcloud_spanner::client::{Client, ClientConfig};
use gcloud_spanner::key::Key;
use gcloud_spanner::mutation::{delete, insert};
use gcloud_spanner::statement::Statement;
use gcloud_spanner::value::CommitTimestamp;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;

/// A stored keyword record.
///
/// `alert_count` is written once (as 0) at creation and never modified; it is
/// carried through to the UI as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub id: String,
    pub text: String,
    pub alert_count: i64,
}

const KEYWORDS_TABLE_DDL: &str = r#"
CREATE TABLE keywords (
    id STRING(36) NOT NULL,
    text STRING(MAX) NOT NULL,
    alert_count INT64 NOT NULL DEFAULT (0),
    created_at TIMESTAMP NOT NULL OPTIONS (allow_commit_timestamp=true),
) PRIMARY KEY (id)
"#;

/// Shareable handle to the keyword collection, for use across async handlers.
#[derive(Clone)]
pub struct KeywordStore {
    inner: Arc<Client>,
}

impl KeywordStore {
    /// Open a connection to the configured Spanner database.
    ///
    /// The gcloud-spanner library detects the SPANNER_EMULATOR_HOST
    /// environment variable and connects to the emulator when set, or to
    /// production Spanner otherwise. Missing resources (instance, database,
    /// `keywords` table) are provisioned first so local development against
    /// the emulator needs no manual setup.
    pub async fn connect(config: &Config) -> Result<Self> {
        provision(config).await?;

        let database_path = format!(
            "projects/{}/instances/{}/databases/{}",
            config.spanner_project, config.spanner_instance, config.spanner_database
        );

        match &config.spanner_emulator_host {
            Some(host) => tracing::info!("Connecting to Spanner emulator at {}", host),
            None => tracing::info!("Connecting to production Spanner"),
        }

        let client = Client::new(&database_path, ClientConfig::default())
            .await
            .context("Failed to create Spanner client")?;

        tracing::info!("Connected to Spanner database: {}", database_path);

        Ok(Self {
            inner: Arc::new(client),
        })
    }

    /// Return all keyword records. Order is whatever the store returns.
    pub async fn find_all(&self) -> Result<Vec<Keyword>> {
        let statement = Statement::new("SELECT id, text, alert_count FROM keywords");

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create read transaction")?;

        let mut rows = tx
            .query(statement)
            .await
            .context("Failed to query keywords")?;

        let mut keywords = Vec::new();
        while let Some(row) = rows.next().await? {
            keywords.push(Keyword {
                id: row.column_by_name("id")?,
                text: row.column_by_name("text")?,
                alert_count: row.column_by_name("alert_count")?,
            });
        }

        tracing::debug!("Listed {} keywords", keywords.len());
        Ok(keywords)
    }

    /// Look up a keyword by its exact text (case-sensitive), or None.
    pub async fn find_by_text(&self, text: &str) -> Result<Option<Keyword>> {
        let mut statement =
            Statement::new("SELECT id, text, alert_count FROM keywords WHERE text = @text LIMIT 1");
        statement.add_param("text", &text.to_string());

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create read transaction")?;

        let mut rows = tx
            .query(statement)
            .await
            .context("Failed to query keyword by text")?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Keyword {
                id: row.column_by_name("id")?,
                text: row.column_by_name("text")?,
                alert_count: row.column_by_name("alert_count")?,
            }))
        } else {
            Ok(None)
        }
    }

    /// Insert a new keyword with a store-assigned id and an alert count of 0.
    ///
    /// Text uniqueness is the caller's concern; this only guarantees a fresh
    /// unique id.
    pub async fn insert(&self, text: &str) -> Result<Keyword> {
        let id = Uuid::new_v4().to_string();
        let text = text.to_string();

        let mutation = insert(
            "keywords",
            &["id", "text", "alert_count", "created_at"],
            &[&id, &text, &0i64, &CommitTimestamp::new()],
        );

        self.inner
            .apply(vec![mutation])
            .await
            .context("Failed to insert keyword")?;

        tracing::debug!("Inserted keyword {} ({})", id, text);
        Ok(Keyword {
            id,
            text,
            alert_count: 0,
        })
    }

    /// Delete the keyword with the given id. Deleting an id that does not
    /// exist is not an error.
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        let mutation = delete("keywords", Key::new(&id.to_string()));

        self.inner
            .apply(vec![mutation])
            .await
            .context("Failed to delete keyword")?;

        tracing::debug!("Deleted keyword {}", id);
        Ok(())
    }

    /// Verify the database connection with a lightweight query.
    pub async fn health_check(&self) -> Result<()> {
        let statement = Statement::new("SELECT 1");

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create health check transaction")?;

        let mut rows = tx
            .query(statement)
            .await
            .context("Failed to execute health check query")?;

        if rows.next().await?.is_some() {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Health check query returned no results"))
        }
    }
}

/// Create the Spanner instance, database, and `keywords` table when missing.
async fn provision(config: &Config) -> Result<()> {
    tracing::info!("Checking Spanner resources...");

    let admin_client = AdminClient::new(AdminClientConfig::default())
        .await
        .context("Failed to create Spanner admin client")?;

    let project_path = format!("projects/{}", config.spanner_project);
    let instance_path = format!("{}/instances/{}", project_path, config.spanner_instance);
    let database_path = format!("{}/databases/{}", instance_path, config.spanner_database);

    ensure_instance(&admin_client, config, &project_path, &instance_path).await?;
    ensure_database(&admin_client, &instance_path, &database_path).await?;
    ensure_table(&admin_client, &database_path).await?;

    Ok(())
}

async fn ensure_instance(
    admin_client: &AdminClient,
    config: &Config,
    project_path: &str,
    instance_path: &str,
) -> Result<()> {
    let get_request = GetInstanceRequest {
        name: instance_path.to_string(),
        field_mask: None,
    };

    match admin_client.instance().get_instance(get_request, None).await {
        Ok(_) => Ok(()),
        Err(status) if status.code() == Code::NotFound => {
            tracing::info!("Instance not found, creating: {}", instance_path);

            let instance_config = if config.spanner_emulator_host.is_some() {
                format!("{}/instanceConfigs/emulator-config", project_path)
            } else {
                format!("{}/instanceConfigs/regional-us-central1", project_path)
            };

            let create_request = CreateInstanceRequest {
                parent: project_path.to_string(),
                instance_id: config.spanner_instance.clone(),
                instance: Some(Instance {
                    name: instance_path.to_string(),
                    config: instance_config,
                    display_name: format!("{} instance", config.spanner_instance),
                    node_count: 1,
                    ..Default::default()
                }),
            };

            let mut operation = admin_client
                .instance()
                .create_instance(create_request, None)
                .await
                .context("Failed to start instance creation")?;

            operation.wait(None).await.context("Failed to create instance")?;

            tracing::info!("Instance created: {}", instance_path);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(
            "Failed to check instance existence: {}",
            e.message()
        )),
    }
}

async fn ensure_database(
    admin_client: &AdminClient,
    instance_path: &str,
    database_path: &str,
) -> Result<()> {
    let get_request = GetDatabaseRequest {
        name: database_path.to_string(),
    };

    match admin_client.database().get_database(get_request, None).await {
        Ok(_) => Ok(()),
        Err(status) if status.code() == Code::NotFound => {
            tracing::info!("Database not found, creating: {}", database_path);

            let database_id = database_path
                .split('/')
                .next_back()
                .context("Invalid database path")?;

            let create_request = CreateDatabaseRequest {
                parent: instance_path.to_string(),
                create_statement: format!("CREATE DATABASE `{}`", database_id),
                extra_statements: vec![],
                encryption_config: None,
                database_dialect: 1, // Google Standard SQL
                proto_descriptors: vec![],
            };

            let mut operation = admin_client
                .database()
                .create_database(create_request, None)
                .await
                .context("Failed to start database creation")?;

            operation.wait(None).await.context("Failed to create database")?;

            tracing::info!("Database created: {}", database_path);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(
            "Failed to check database existence: {}",
            e.message()
        )),
    }
}

async fn ensure_table(admin_client: &AdminClient, database_path: &str) -> Result<()> {
    let get_ddl_request = GetDatabaseDdlRequest {
        database: database_path.to_string(),
    };

    let ddl_response = admin_client
        .database()
        .get_database_ddl(get_ddl_request, None)
        .await
        .context("Failed to get database DDL")?;

    let table_exists = ddl_response
        .into_inner()
        .statements
        .iter()
        .any(|stmt| stmt.contains("CREATE TABLE keywords") || stmt.contains("CREATE TABLE `keywords`"));

    if table_exists {
        return Ok(());
    }

    tracing::info!("Table 'keywords' not found, creating...");

    let update_request = UpdateDatabaseDdlRequest {
        database: database_path.to_string(),
        statements: vec![KEYWORDS_TABLE_DDL.trim().to_string()],
        operation_id: String::new(),
        proto_descriptors: vec![],
        throughput_mode: false,
    };

    let mut operation = admin_client
        .database()
        .update_database_ddl(update_request, None)
        .await
        .context("Failed to start table creation")?;

    operation.wait(None).await.context("Failed to create table")?;

    tracing::info!("Table 'keywords' created");
    Ok(())
}
