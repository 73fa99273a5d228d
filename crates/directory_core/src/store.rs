use std::collections::HashMap;

use crate::{Record, RecordId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MalformedDataError {
    #[error("record data is not well-formed: {message}")]
    Syntax { message: String },
    #[error("record #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("record #{index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },
    #[error("duplicate record id {id} (records #{first_index} and #{second_index})")]
    DuplicateId {
        id: RecordId,
        first_index: usize,
        second_index: usize,
    },
}

/// The full, read-only record set in source order.
///
/// Validation happens once in [`RecordStore::new`]; a store that exists is
/// known to have unique ids and non-empty names and titles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    index_by_id: HashMap<RecordId, usize>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Result<Self, MalformedDataError> {
        let mut index_by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(MalformedDataError::EmptyField {
                    index,
                    field: "name",
                });
            }
            if record.title.trim().is_empty() {
                return Err(MalformedDataError::EmptyField {
                    index,
                    field: "jobTitle",
                });
            }
            if let Some(first_index) = index_by_id.insert(record.id, index) {
                return Err(MalformedDataError::DuplicateId {
                    id: record.id,
                    first_index,
                    second_index: index,
                });
            }
        }
        Ok(Self {
            records,
            index_by_id,
        })
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.index_by_id.get(&id).map(|&index| &self.records[index])
    }
}
