use super::{Flavor, Ident, Params, ToSql};

use crate::stmt::{ColumnDef, Type};

impl ToSql for &ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);

        match f.serializer.flavor {
            // SERIAL implies NOT NULL and a backing sequence
            Flavor::Postgresql if self.auto_increment && self.ty == Type::Integer => {
                fmt!(f, name " SERIAL")
            }
            Flavor::Postgresql if self.auto_increment => fmt!(f, name " BIGSERIAL"),
            _ => {
                let not_null = if self.not_null { " NOT NULL" } else { "" };
                let auto_increment = if self.auto_increment {
                    " AUTO_INCREMENT"
                } else {
                    ""
                };

                fmt!(f, name " " self.ty not_null auto_increment)
            }
        }
    }
}
