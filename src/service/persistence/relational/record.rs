use async_trait::async_trait;
use roster_core::Record;
use sqlx::PgPool;
use std::sync::Arc;

use crate::persistence::Persistence;

#[derive(Debug, sqlx::FromRow)]
struct RecordRow {
    id: String,
    name: String,
    position: String,
    level: String,
}

impl TryFrom<RecordRow> for Record {
    type Error = anyhow::Error;

    fn try_from(row: RecordRow) -> anyhow::Result<Self> {
        Ok(Record {
            level: row.level.parse()?,
            id: row.id,
            name: row.name,
            position: row.position,
        })
    }
}

#[derive(Debug)]
pub struct RecordRelationalPersistence {
    pub db: Arc<PgPool>,
}

#[async_trait]
impl Persistence<Record> for RecordRelationalPersistence {
    #[tracing::instrument(name = "relational::record::create", skip_all)]
    async fn create(&self, record: &Record) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO records
               (id, name, position, level)
            VALUES
               ($1, $2, $3, $4)
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.position)
        .bind(record.level.as_str())
        .execute(&*self.db)
        .await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(name = "relational::record::delete", skip_all)]
    async fn delete(&self, id: &str) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM records WHERE id = $1")
            .bind(id)
            .execute(&*self.db)
            .await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(name = "relational::record::get_by_id", skip_all)]
    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Record>> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, name, position, level FROM records WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&*self.db)
        .await?;

        row.map(Record::try_from).transpose()
    }

    #[tracing::instrument(name = "relational::record::list", skip_all)]
    async fn list(&self) -> anyhow::Result<Vec<Record>> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, name, position, level FROM records ORDER BY seq",
        )
        .fetch_all(&*self.db)
        .await?;

        rows.into_iter().map(Record::try_from).collect()
    }

    #[tracing::instrument(name = "relational::record::update", skip_all)]
    async fn update(&self, record: &Record) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE records SET
               name = $2,
               position = $3,
               level = $4
            WHERE id = $1
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.position)
        .bind(record.level.as_str())
        .execute(&*self.db)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use roster_core::{test::get_record_fixture, Level};
    use sqlx::postgres::PgPoolOptions;

    use super::*;

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a PostgreSQL instance"]
    async fn test_create_get_update_delete() {
        dotenvy::dotenv().ok();

        let database_url = dotenvy::var("DATABASE_URL").unwrap();
        let db = Arc::new(PgPoolOptions::new().connect(&database_url).await.unwrap());
        sqlx::migrate!().run(&*db).await.unwrap();

        let record_persistence = RecordRelationalPersistence { db };
        let mut record = get_record_fixture(Some("record-under-test"));

        // delete record if it exists
        let _ = record_persistence.delete(&record.id).await.unwrap();

        assert_eq!(record_persistence.create(&record).await.unwrap(), 1);

        let fetched_record = record_persistence
            .get_by_id(&record.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched_record, record);

        record.level = Level::Senior;
        assert_eq!(record_persistence.update(&record).await.unwrap(), 1);

        let listed = record_persistence.list().await.unwrap();
        assert!(listed.contains(&record));

        assert_eq!(record_persistence.delete(&record.id).await.unwrap(), 1);
        assert!(record_persistence
            .get_by_id(&record.id)
            .await
            .unwrap()
            .is_none());
    }
}
