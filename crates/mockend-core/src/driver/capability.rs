#[derive(Debug)]
pub struct Capability {
    /// Name of the generated key column in returned rows.
    pub primary_key: &'static str,

    /// When true, `register_model` creates the backing table and must finish
    /// before the server starts listening.
    pub schema_sync: bool,
}

impl Capability {
    /// MongoDB capabilities
    pub const MONGODB: Self = Self {
        primary_key: "_id",
        schema_sync: false,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        primary_key: "id",
        schema_sync: true,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self { ..Self::MYSQL };
}
