use super::{Flavor, Formatter, ToSql};

use crate::stmt::{Type, Value};

pub trait Params {
    fn push(&mut self, param: &Value, ty: Option<Type>) -> Placeholder;
}

/// Position of a pushed parameter, starting at 1.
pub struct Placeholder(pub usize);

/// A parameter value with the storage type of the column it is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,
    pub ty: Option<Type>,
}

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value, _ty: Option<Type>) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl Params for Vec<TypedValue> {
    fn push(&mut self, value: &Value, ty: Option<Type>) -> Placeholder {
        self.push(TypedValue {
            value: value.clone(),
            ty,
        });
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Mysql => f.dst.push('?'),
            Flavor::Postgresql => {
                f.dst.push('$');
                f.dst.push_str(&self.0.to_string());
            }
        }
    }
}
