use super::{Flavor, Params, ToSql};

use crate::stmt::Type;

impl ToSql for Type {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Type::Integer => fmt!(f, "INTEGER"),
            Type::BigInt => fmt!(f, "BIGINT"),
            Type::Boolean => fmt!(f, "BOOLEAN"),
            Type::VarChar(size) => {
                f.dst.push_str("VARCHAR(");
                f.dst.push_str(&size.to_string());
                f.dst.push(')');
            }
            Type::Timestamp => match f.serializer.flavor {
                Flavor::Mysql => fmt!(f, "DATETIME"),
                Flavor::Postgresql => fmt!(f, "TIMESTAMP WITH TIME ZONE"),
            },
        }
    }
}
