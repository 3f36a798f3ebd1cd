use tests::Setup;

struct MongoDbSetup {
    url: String,
}

impl MongoDbSetup {
    fn from_env() -> Option<Self> {
        tests::env_url("MOCKEND_TEST_MONGODB_URL").map(|url| Self { url })
    }
}

#[async_trait::async_trait]
impl Setup for MongoDbSetup {
    fn url(&self) -> &str {
        &self.url
    }

    async fn delete_table(&self, name: &str) {
        let descriptor = mockend::ConnectionDescriptor::parse(&self.url).unwrap();
        let client = mongodb::Client::with_uri_str(&self.url)
            .await
            .expect("Failed to connect to MongoDB");

        client
            .database(&descriptor.database)
            .collection::<mongodb::bson::Document>(name)
            .drop()
            .await
            .expect("Failed to drop collection");
    }
}

tests::scenario_tests!(MongoDbSetup::from_env();
    crud_round_trip,
    create_many_then_find_all,
    uncastable_value_is_rejected,
    unknown_ids_are_not_found,
    null_values_are_stored,
);
