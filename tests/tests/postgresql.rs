use tests::Setup;
use tokio_postgres::NoTls;

struct PostgreSqlSetup {
    url: String,
}

impl PostgreSqlSetup {
    fn from_env() -> Option<Self> {
        tests::env_url("MOCKEND_TEST_POSTGRESQL_URL").map(|url| Self { url })
    }
}

#[async_trait::async_trait]
impl Setup for PostgreSqlSetup {
    fn url(&self) -> &str {
        &self.url
    }

    async fn delete_table(&self, name: &str) {
        let (client, connection) = tokio_postgres::connect(&self.url, NoTls)
            .await
            .expect("Failed to connect to PostgreSQL");

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                eprintln!("connection error: {}", e);
            }
        });

        let sql = format!("DROP TABLE IF EXISTS \"{}\"", name);
        client
            .batch_execute(&sql)
            .await
            .expect("Failed to drop table");
    }
}

tests::scenario_tests!(PostgreSqlSetup::from_env();
    crud_round_trip,
    create_many_then_find_all,
    uncastable_value_is_rejected,
    unknown_ids_are_not_found,
    null_values_are_stored,
);
