use chrono::{NaiveDate, Utc};

use crate::model::Record;

/// In-memory, insertion-ordered list of records owned by a single page.
///
/// Every operation is total: updating or deleting an unknown id is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct Store<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Store<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self { records: seed }
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id handed to the next created record: the current length plus one.
    ///
    /// After a deletion this can repeat an id that is still in use.
    pub fn next_id(&self) -> String {
        (self.records.len() + 1).to_string()
    }

    /// Append a record built from `draft`, stamped with today's UTC date.
    pub fn create(&mut self, draft: &T::Draft) -> &T {
        self.create_on(draft, today())
    }

    /// Same as [`Store::create`] with an explicit creation date.
    pub fn create_on(&mut self, draft: &T::Draft, today: NaiveDate) -> &T {
        let id = self.next_id();
        if self.get(&id).is_some() {
            log::warn!("{} id {id} is already in use, creating a duplicate", T::KIND);
        }
        log::debug!("create {} {id}", T::KIND);
        self.records.push(T::from_draft(id, draft, today));
        &self.records[self.records.len() - 1]
    }

    /// Merge `draft` onto every record with `id`. Returns how many records
    /// were touched; more than one only when ids have collided.
    pub fn update(&mut self, id: &str, draft: &T::Draft) -> usize {
        let mut touched = 0;
        for record in self.records.iter_mut().filter(|r| r.id() == id) {
            record.merge(draft);
            touched += 1;
        }
        if touched == 0 {
            log::debug!("update skipped, no {} with id {id}", T::KIND);
        } else {
            log::debug!("update {} {id} ({touched} records)", T::KIND);
        }
        touched
    }

    /// Remove the first record with `id`, returning it.
    pub fn delete(&mut self, id: &str) -> Option<T> {
        match self.records.iter().position(|r| r.id() == id) {
            Some(idx) => {
                log::debug!("delete {} {id}", T::KIND);
                Some(self.records.remove(idx))
            }
            None => {
                log::debug!("delete skipped, no {} with id {id}", T::KIND);
                None
            }
        }
    }
}

/// Current calendar day in UTC, the date stamped on new records.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
