mod value;
pub(crate) use value::Value;

use mockend_core::{
    async_trait,
    connection::{ConnectionDescriptor, Dialect, Engine},
    driver::{
        operation::{DeleteById, GetById, Insert, Operation, UpdateById},
        Capability, Driver, Response,
    },
    schema::Model,
    stmt::Row,
    Error, Result,
};
use mockend_sql as sql;
use mysql_async::{
    prelude::Queryable,
    Conn, Pool,
};

#[derive(Debug)]
pub struct MySQL {
    pool: Pool,

    /// Set once the model is registered
    table: Option<sql::Table>,
}

impl MySQL {
    /// Creates a connection pool for a `mysql://` URL.
    ///
    /// No connection is opened until the model is registered.
    pub fn connect(descriptor: &ConnectionDescriptor) -> Result<Self> {
        if descriptor.engine != Engine::Relational(Dialect::MySQL) {
            return Err(Error::unsupported_connection_url(&descriptor.url));
        }

        let opts = mysql_async::Opts::from_url(&descriptor.url)
            .map_err(|err| {
                Error::invalid_connection_url(format!("{err}; url={}", descriptor.url))
            })?;

        // Report matched rows rather than changed rows, so an UPDATE that
        // assigns identical values still finds its record.
        let opts = mysql_async::OptsBuilder::from_opts(opts).client_found_rows(true);

        Ok(Self::from(Pool::new(opts)))
    }

    fn table(&self) -> Result<&sql::Table> {
        self.table
            .as_ref()
            .ok_or_else(|| mockend_core::err!("no model registered with the MySQL driver"))
    }

    async fn conn(&self) -> Result<Conn> {
        self.pool.get_conn().await.map_err(Error::driver)
    }

    async fn create_table(&self, table: &sql::Table) -> Result<()> {
        let mut params: Vec<sql::TypedValue> = Vec::new();
        let sql =
            sql::Serializer::mysql(table).serialize(&sql::Statement::create_table(table), &mut params);

        assert!(
            params.is_empty(),
            "creating a table shouldn't involve any parameters"
        );

        let mut conn = self.conn().await?;
        conn.query_drop(&sql).await.map_err(Error::driver)?;

        Ok(())
    }

    async fn insert(&self, table: &sql::Table, op: Insert) -> Result<Response> {
        let stmt = sql::Statement::insert(table, table.assignments(op.row)?);

        let mut conn = self.conn().await?;
        exec_drop(&mut conn, table, &stmt).await?;

        // The key is read on the same connection that ran the INSERT
        let id: u64 = conn
            .query_first("SELECT LAST_INSERT_ID()")
            .await
            .map_err(Error::driver)?
            .ok_or_else(|| Error::invalid_result("LAST_INSERT_ID() returned no rows"))?;

        let id = i64::try_from(id)
            .map_err(|_| Error::invalid_result(format!("generated id {id} is out of range")))?;

        let rows = query(&mut conn, table, &sql::Statement::select_by_id(table, id)).await?;
        Ok(Response::values(rows))
    }

    async fn find_all(&self, table: &sql::Table) -> Result<Response> {
        let mut conn = self.conn().await?;
        let rows = query(&mut conn, table, &sql::Statement::select_all(table)).await?;
        Ok(Response::values(rows))
    }

    async fn get_by_id(&self, table: &sql::Table, op: GetById) -> Result<Response> {
        let Some(id) = parse_id(&op.id) else {
            return Ok(Response::empty_values());
        };

        let mut conn = self.conn().await?;
        let rows = query(&mut conn, table, &sql::Statement::select_by_id(table, id)).await?;
        Ok(Response::values(rows))
    }

    async fn update_by_id(&self, table: &sql::Table, op: UpdateById) -> Result<Response> {
        let Some(id) = parse_id(&op.id) else {
            return Ok(Response::empty_values());
        };

        let assignments = table.assignments(op.assignments)?;
        let mut conn = self.conn().await?;

        if !assignments.is_empty() {
            let stmt = sql::Statement::update_by_id(table, id, assignments);

            if exec_drop(&mut conn, table, &stmt).await? == 0 {
                return Ok(Response::empty_values());
            }
        }

        let rows = query(&mut conn, table, &sql::Statement::select_by_id(table, id)).await?;
        Ok(Response::values(rows))
    }

    async fn delete_by_id(&self, table: &sql::Table, op: DeleteById) -> Result<Response> {
        let Some(id) = parse_id(&op.id) else {
            return Ok(Response::count(0));
        };

        let mut conn = self.conn().await?;
        let count = exec_drop(&mut conn, table, &sql::Statement::delete_by_id(table, id)).await?;
        Ok(Response::count(count))
    }
}

impl From<Pool> for MySQL {
    fn from(pool: Pool) -> Self {
        Self { pool, table: None }
    }
}

#[async_trait]
impl Driver for MySQL {
    fn capability(&self) -> &'static Capability {
        &Capability::MYSQL
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

        match op {
            Operation::Insert(op) => self.insert(table, op).await,
            Operation::FindAll(_) => self.find_all(table).await,
            Operation::GetById(op) => self.get_by_id(table, op).await,
            Operation::UpdateById(op) => self.update_by_id(table, op).await,
            Operation::DeleteById(op) => self.delete_by_id(table, op).await,
        }
    }

    async fn close(&self) -> Result<()> {
        self.pool.clone().disconnect().await.map_err(Error::driver)
    }
}

/// Keys are auto-increment integers; anything else cannot match a row.
fn parse_id(id: &str) -> Option<i64> {
    id.parse().ok()
}

fn serialize(table: &sql::Table, stmt: &sql::Statement) -> Result<(String, mysql_async::Params)> {
    let mut params: Vec<sql::TypedValue> = Vec::new();
    let sql = sql::Serializer::mysql(table).serialize(stmt, &mut params);

    let args = params
        .into_iter()
        .map(|param| Value::from(param.value).to_mysql(param.ty))
        .collect::<Result<Vec<_>>>()?;

    let args = if args.is_empty() {
        mysql_async::Params::Empty
    } else {
        mysql_async::Params::Positional(args)
    };

    Ok((sql, args))
}

/// Runs a statement that returns no rows, returning the affected row count.
async fn exec_drop(conn: &mut Conn, table: &sql::Table, stmt: &sql::Statement) -> Result<u64> {
    let (sql, args) = serialize(table, stmt)?;

    conn.exec_drop(sql, args).await.map_err(Error::driver)?;

    Ok(conn.affected_rows())
}

async fn query(conn: &mut Conn, table: &sql::Table, stmt: &sql::Statement) -> Result<Vec<Row>> {
    let (sql, args) = serialize(table, stmt)?;

    let rows: Vec<mysql_async::Row> = conn.exec(sql, args).await.map_err(Error::driver)?;

    rows.into_iter()
        .map(|row| value::decode_row(row, table))
        .collect()
}
