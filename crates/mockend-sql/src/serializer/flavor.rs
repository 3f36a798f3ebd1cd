use super::Serializer;

use crate::stmt::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Mysql,
    Postgresql,
}

impl<'a> Serializer<'a> {
    pub fn mysql(table: &'a Table) -> Serializer<'a> {
        Serializer {
            table,
            flavor: Flavor::Mysql,
        }
    }

    pub fn postgresql(table: &'a Table) -> Serializer<'a> {
        Serializer {
            table,
            flavor: Flavor::Postgresql,
        }
    }

    pub(super) fn is_mysql(&self) -> bool {
        self.flavor == Flavor::Mysql
    }
}
