// This file is part of chess-tournament.
//
// chess-tournament is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// chess-tournament is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{
    collections::BTreeMap,
    fs, io,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::Id;

/// An entity that lives in its own table of the store.
///
/// Records carry their id only in memory: the persisted form is the plain
/// field mapping, and the table key is the identity. `Store::get` and
/// `Store::all` stamp the key back onto everything they return.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const TABLE: &'static str;

    fn id(&self) -> Option<Id>;
    fn set_id(&mut self, id: Id);
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The table file exists but does not parse.
    #[error("RON: {path}: {message}")]
    Corrupt { path: PathBuf, message: String },
    #[error("RON: {path}: {message}")]
    Encode { path: PathBuf, message: String },
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A file-backed document store: one RON table file per record type.
///
/// Every operation reads and rewrites the table file it touches, so the
/// last write wins. Nothing locks the files; a single operator is assumed.
#[derive(Clone, Debug)]
pub struct Store {
    folder: PathBuf,
}

impl Store {
    /// Open a store rooted at `folder`, creating the folder if needed.
    ///
    /// # Errors
    ///
    /// If the folder can not be created.
    pub fn open(folder: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let folder = folder.into();
        fs::create_dir_all(&folder).map_err(|source| StoreError::Io {
            path: folder.clone(),
            source,
        })?;

        Ok(Self { folder })
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Write the record to its table.
    ///
    /// A record without an id gets the next free one (ids start at 1)
    /// stamped onto it; a record with an id overwrites its table entry.
    /// One file write per call, nothing is batched.
    ///
    /// # Errors
    ///
    /// If the table file can not be read or written.
    pub fn save<R: Record>(&self, record: &mut R) -> Result<(), StoreError> {
        let mut table = self.read_table::<R>()?;

        let id = match record.id() {
            Some(id) => id,
            None => {
                let id = table.keys().next_back().copied().unwrap_or_default() + 1;
                record.set_id(id);
                id
            }
        };

        table.insert(id, record.clone());
        self.write_table::<R>(&table)
    }

    /// Fetch a record by id. A missing record is `None`, not an error.
    ///
    /// # Errors
    ///
    /// If the table file can not be read.
    pub fn get<R: Record>(&self, id: Id) -> Result<Option<R>, StoreError> {
        let mut table = self.read_table::<R>()?;

        Ok(table.remove(&id).map(|mut record| {
            record.set_id(id);
            record
        }))
    }

    /// Every record of the type, in id order.
    ///
    /// # Errors
    ///
    /// If the table file can not be read.
    pub fn all<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        let table = self.read_table::<R>()?;

        Ok(table
            .into_iter()
            .map(|(id, mut record)| {
                record.set_id(id);
                record
            })
            .collect())
    }

    fn table_path<R: Record>(&self) -> PathBuf {
        self.folder.join(format!("{}.ron", R::TABLE))
    }

    fn read_table<R: Record>(&self) -> Result<BTreeMap<Id, R>, StoreError> {
        let path = self.table_path::<R>();

        match fs::read_to_string(&path) {
            Ok(string) => ron::from_str(&string).map_err(|err| StoreError::Corrupt {
                path,
                message: err.to_string(),
            }),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(BTreeMap::new()),
                _ => Err(StoreError::Io { path, source: err }),
            },
        }
    }

    fn write_table<R: Record>(&self, table: &BTreeMap<Id, R>) -> Result<(), StoreError> {
        let path = self.table_path::<R>();
        let string = ron::ser::to_string_pretty(table, ron::ser::PrettyConfig::default()).map_err(
            |err| StoreError::Encode {
                path: path.clone(),
                message: err.to_string(),
            },
        )?;

        fs::write(&path, string).map_err(|source| StoreError::Io { path, source })
    }
}
