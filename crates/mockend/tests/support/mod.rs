#![allow(dead_code)]

use mockend::{
    async_trait,
    driver::{operation::*, Capability, Driver, Operation, Response},
    stmt::Row,
    FieldSchema, Model, Result,
};

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicI64, Ordering},
        Mutex,
    },
};

/// Keeps rows in memory, keyed by an auto-incrementing `id`.
#[derive(Debug, Default)]
pub struct MemoryDriver {
    rows: Mutex<BTreeMap<i64, Row>>,
    next_id: AtomicI64,
    fields: Vec<String>,
}

static CAPABILITY: Capability = Capability {
    primary_key: "id",
    schema_sync: false,
};

impl MemoryDriver {
    pub fn new() -> MemoryDriver {
        MemoryDriver::default()
    }

    fn stored(&self, id: i64, row: &Row) -> Row {
        let mut out = Row::new();
        out.insert("id", id);
        for (name, value) in row.iter() {
            out.insert(name, value.clone());
        }
        out
    }

    fn lookup(&self, id: &str) -> Option<i64> {
        id.parse().ok()
    }
}

#[async_trait]
impl Driver for MemoryDriver {
    fn capability(&self) -> &'static Capability {
        &CAPABILITY
    }

    async fn register_model(&mut self, model: &Model) -> Result<()> {
        self.fields = model.fields.names().map(str::to_string).collect();
        Ok(())
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        let mut rows = self.rows.lock().unwrap();

        Ok(match op {
            Operation::Insert(Insert { row }) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                let mut stored = Row::new();
                for name in &self.fields {
                    if let Some(value) = row.get(name) {
                        stored.insert(name.as_str(), value.clone());
                    }
                }
                let out = self.stored(id, &stored);
                rows.insert(id, stored);
                Response::values([out])
            }
            Operation::FindAll(FindAll {}) => {
                Response::values(rows.iter().map(|(id, row)| self.stored(*id, row)))
            }
            Operation::GetById(GetById { id }) => Response::optional(
                self.lookup(&id)
                    .and_then(|id| rows.get(&id).map(|row| self.stored(id, row))),
            ),
            Operation::UpdateById(UpdateById { id, assignments }) => {
                let Some(id) = self.lookup(&id) else {
                    return Ok(Response::empty_values());
                };
                let Some(row) = rows.get_mut(&id) else {
                    return Ok(Response::empty_values());
                };
                for (name, value) in assignments {
                    row.insert(name, value);
                }
                Response::values([self.stored(id, row)])
            }
            Operation::DeleteById(DeleteById { id }) => {
                let removed = self.lookup(&id).and_then(|id| rows.remove(&id));
                Response::count(removed.is_some() as u64)
            }
        })
    }
}

pub fn teacher_fields() -> FieldSchema {
    FieldSchema::parse([
        ("name", "string"),
        ("age", "number"),
        ("active", "boolean"),
        ("hired", "date"),
    ])
    .unwrap()
}

pub fn teacher() -> Model {
    Model::new("teacher", teacher_fields()).unwrap()
}
