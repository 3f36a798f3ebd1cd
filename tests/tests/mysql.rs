use mysql_async::prelude::Queryable;
use tests::Setup;

struct MySqlSetup {
    url: String,
}

impl MySqlSetup {
    fn from_env() -> Option<Self> {
        tests::env_url("MOCKEND_TEST_MYSQL_URL").map(|url| Self { url })
    }
}

#[async_trait::async_trait]
impl Setup for MySqlSetup {
    fn url(&self) -> &str {
        &self.url
    }

    async fn delete_table(&self, name: &str) {
        let pool = mysql_async::Pool::new(self.url.as_str());
        let mut conn = pool.get_conn().await.expect("Failed to get connection");

        let sql = format!("DROP TABLE IF EXISTS `{}`", name);
        conn.query_drop(&sql).await.expect("Failed to drop table");

        drop(conn);
        pool.disconnect().await.expect("Failed to disconnect");
    }
}

tests::scenario_tests!(MySqlSetup::from_env();
    crud_round_trip,
    create_many_then_find_all,
    uncastable_value_is_rejected,
    unknown_ids_are_not_found,
    null_values_are_stored,
);
