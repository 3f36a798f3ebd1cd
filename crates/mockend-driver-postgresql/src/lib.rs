mod value;
pub(crate) use value::Value;

use mockend_core::{
    async_trait,
    connection::{ConnectionDescriptor, Dialect, Engine},
    driver::{Capability, Driver, Operation, Response},
    schema::Model,
    stmt::Row,
    Error, Result,
};
use mockend_sql as sql;
use tokio_postgres::{
    tls::MakeTlsConnect,
    types::ToSql,
    Client, Config, Socket,
};

#[derive(Debug)]
pub struct PostgreSQL {
    /// The PostgreSQL client.
    client: Client,

    /// Set once the model is registered
    table: Option<sql::Table>,
}

impl PostgreSQL {
    /// Initialize a PostgreSQL driver using an initialized connection.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            table: None,
        }
    }

    /// Connects to a PostgreSQL database described by a `postgresql://` URL.
    pub async fn connect(descriptor: &ConnectionDescriptor) -> Result<Self> {
        if descriptor.engine != Engine::Relational(Dialect::PostgreSQL) {
            return Err(Error::unsupported_connection_url(&descriptor.url));
        }

        let mut config = Config::new();
        config.dbname(&descriptor.database);

        if let Some(host) = &descriptor.host {
            config.host(host);
        }

        if let Some(port) = descriptor.port {
            config.port(port);
        }

        if let Some(credentials) = &descriptor.credentials {
            config.user(&credentials.username);

            if let Some(password) = &credentials.password {
                config.password(password);
            }
        }

        Self::connect_with_config(config, tokio_postgres::NoTls).await
    }

    /// Connects to a PostgreSQL database using a [`tokio_postgres::Config`].
    pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send,
    {
        let (client, connection) = config.connect(tls).await.map_err(Error::driver)?;

        tokio::spawn(async move {
            if let Err(err) = connection.await {
                tracing::error!(error = %err, "PostgreSQL connection error");
            }
        });

        Ok(Self::new(client))
    }

    fn table(&self) -> Result<&sql::Table> {
        self.table
            .as_ref()
            .ok_or_else(|| mockend_core::err!("no model registered with the PostgreSQL driver"))
    }

    /// Creates the model's table unless it already exists.
    pub async fn create_table(&self, table: &sql::Table) -> Result<()> {
        let mut params: Vec<sql::TypedValue> = Vec::new();
        let sql = sql::Serializer::postgresql(table)
            .serialize(&sql::Statement::create_table(table), &mut params);

        assert!(
            params.is_empty(),
            "creating a table shouldn't involve any parameters"
        );

        self.client
            .batch_execute(&sql)
            .await
            .map_err(Error::driver)?;

        Ok(())
    }

    /// Runs a statement. Statements with a RETURNING clause or a SELECT yield
    /// rows; everything else yields the affected row count.
    async fn run(&self, table: &sql::Table, stmt: &sql::Statement) -> Result<Response> {
        let mut params: Vec<sql::TypedValue> = Vec::new();
        let sql_as_str = sql::Serializer::postgresql(table).serialize(stmt, &mut params);

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        if !stmt.returns_rows() {
            let count = self
                .client
                .execute(&sql_as_str, &args)
                .await
                .map_err(Error::driver)?;
            return Ok(Response::count(count));
        }

        let rows = self
            .client
            .query(&sql_as_str, &args)
            .await
            .map_err(Error::driver)?;

        let rows = rows
            .iter()
            .map(value::decode_row)
            .collect::<Result<Vec<Row>>>()?;

        Ok(Response::values(rows))
    }
}

impl From<Client> for PostgreSQL {
    fn from(client: Client) -> Self {
        Self::new(client)
    }
}

#[async_trait]
impl Driver for PostgreSQL {
    fn capability(&self) -> &'static Capability {
        &Capability::POSTGRESQL
    }

    async fn register_model(&mut self, model: &Model) -> Result<()> {
        let table = sql::Table::from_model(model);

        self.create_table(&table).await?;
        tracing::info!(table = %table.name, "synchronized table");

        self.table = Some(table);
        Ok(())
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        let table = self.table()?;

        tracing::debug!(operation = op.name(), table = %table.name, "executing operation");

        let stmt = match op {
            Operation::Insert(op) => {
                sql::Statement::insert(table, table.assignments(op.row)?).returning_all(table)
            }
            Operation::FindAll(_) => sql::Statement::select_all(table),
            Operation::GetById(op) => {
                let Some(id) = parse_id(&op.id) else {
                    return Ok(Response::empty_values());
                };
                sql::Statement::select_by_id(table, id)
            }
            Operation::UpdateById(op) => {
                let Some(id) = parse_id(&op.id) else {
                    return Ok(Response::empty_values());
                };

                let assignments = table.assignments(op.assignments)?;

                if assignments.is_empty() {
                    sql::Statement::select_by_id(table, id)
                } else {
                    sql::Statement::update_by_id(table, id, assignments).returning_all(table)
                }
            }
            Operation::DeleteById(op) => {
                let Some(id) = parse_id(&op.id) else {
                    return Ok(Response::count(0));
                };
                sql::Statement::delete_by_id(table, id)
            }
        };

        self.run(table, &stmt).await
    }
}

/// The key column is SERIAL (INT4); anything that does not fit cannot match
/// a row.
fn parse_id(id: &str) -> Option<i64> {
    id.parse::<i32>().ok().map(i64::from)
}
