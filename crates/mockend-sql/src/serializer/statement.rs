use super::{Comma, Ident, Params, ToSql};

use crate::stmt::{self, Statement, Value};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        for (index, column) in self.0.columns.iter().enumerate() {
            fmt!(f, "\n    " column);
            if index < self.0.columns.len() - 1 {
                fmt!(f, ",");
            }
        }

        match &self.0.primary_key {
            Some(pk) => fmt!(f, ",\n    PRIMARY KEY (" Ident(pk) ")\n"),
            None => fmt!(f, "\n"),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        let name = Ident(&self.name);
        let columns = ColumnsWithConstraints(self);

        fmt!(f, "CREATE TABLE " if_not_exists name " (" columns ")");
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "DELETE FROM " Ident(&self.table) self.filter.as_ref());
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let value = Bind {
            column: &self.column,
            value: &self.value,
        };

        fmt!(f, " WHERE " Ident(&self.column) " = " value);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);

        if self.columns.is_empty() {
            if f.serializer.is_mysql() {
                fmt!(f, "INSERT INTO " table " () VALUES ()");
            } else {
                fmt!(f, "INSERT INTO " table " DEFAULT VALUES");
            }
        } else {
            let columns = Comma(self.columns.iter().map(Ident));
            let values = Comma(
                self.columns
                    .iter()
                    .zip(&self.values)
                    .map(|(column, value)| Bind { column, value }),
            );

            fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
        }

        fmt!(f, Returning(self.returning.as_deref()));
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(Ident));
        let order_by = self
            .order_by
            .as_ref()
            .map(|column| (" ORDER BY ", Ident(column)));

        fmt!(f, "SELECT " columns " FROM " Ident(&self.table) self.filter.as_ref() order_by);
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let assignments = Comma(self.assignments.iter().map(|(column, value)| {
            (
                (Ident(column), " = "),
                Bind { column, value },
            )
        }));

        fmt!(
            f, "UPDATE " Ident(&self.table) " SET " assignments self.filter.as_ref() Returning(self.returning.as_deref())
        );
    }
}

/// A value bound as a parameter, typed after the column it is compared with
/// or assigned to.
struct Bind<'a> {
    column: &'a str,
    value: &'a Value,
}

impl ToSql for Bind<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let ty = f.serializer.column_type(self.column);
        let placeholder = f.params.push(self.value, ty);
        fmt!(f, placeholder);
    }
}

struct Returning<'a>(Option<&'a [String]>);

impl ToSql for Returning<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let Some(columns) = self.0 else {
            return;
        };

        assert!(
            !f.serializer.is_mysql(),
            "MySQL does not support the RETURNING clause; returning={columns:?}"
        );

        fmt!(f, " RETURNING " Comma(columns.iter().map(Ident)));
    }
}
