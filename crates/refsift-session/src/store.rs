use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use refsift_ingest::FileFormat;
use refsift_model::Table;
use refsift_output::to_csv_bytes;

use crate::{Result, SessionError, SessionId};

/// The column pair chosen in the selection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnChoice {
    pub data_column: String,
    pub reference_column: String,
}

/// Storage for session tables and column choices.
///
/// Implementations own persistence and expiry; callers only ever hand in
/// and receive whole in-memory [`Table`] values. `get_tables` returns fresh
/// clones, so concurrent requests for different sessions (or even the same
/// one) never share a mutable table.
pub trait SessionStore: Send + Sync {
    /// Persist a merged data table and a reference table under a new id.
    fn create(&self, data: &Table, reference: &Table) -> Result<SessionId>;

    /// Load both tables back: `(data, reference)`.
    fn get_tables(&self, id: SessionId) -> Result<(Table, Table)>;

    /// Attach the chosen column pair.
    fn set_columns(&self, id: SessionId, choice: ColumnChoice) -> Result<()>;

    /// Read the chosen column pair.
    fn get_columns(&self, id: SessionId) -> Result<ColumnChoice>;
}

fn lock_poisoned() -> SessionError {
    SessionError::Io(std::io::Error::other("session store lock poisoned"))
}

#[derive(Debug)]
struct MemoryEntry {
    data: Table,
    reference: Table,
    choice: Option<ColumnChoice>,
}

/// In-memory store. Sessions live as long as the store does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<SessionId, MemoryEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn create(&self, data: &Table, reference: &Table) -> Result<SessionId> {
        let id = SessionId::new();
        let mut sessions = self.sessions.lock().map_err(|_| lock_poisoned())?;
        sessions.insert(
            id,
            MemoryEntry {
                data: data.clone(),
                reference: reference.clone(),
                choice: None,
            },
        );
        tracing::debug!(session = %id, "created in-memory session");
        Ok(id)
    }

    fn get_tables(&self, id: SessionId) -> Result<(Table, Table)> {
        let sessions = self.sessions.lock().map_err(|_| lock_poisoned())?;
        let entry = sessions
            .get(&id)
            .ok_or(SessionError::UnknownSession { id })?;
        Ok((entry.data.clone(), entry.reference.clone()))
    }

    fn set_columns(&self, id: SessionId, choice: ColumnChoice) -> Result<()> {
        let mut sessions = self.sessions.lock().map_err(|_| lock_poisoned())?;
        let entry = sessions
            .get_mut(&id)
            .ok_or(SessionError::UnknownSession { id })?;
        entry.choice = Some(choice);
        Ok(())
    }

    fn get_columns(&self, id: SessionId) -> Result<ColumnChoice> {
        let sessions = self.sessions.lock().map_err(|_| lock_poisoned())?;
        let entry = sessions
            .get(&id)
            .ok_or(SessionError::UnknownSession { id })?;
        entry
            .choice
            .clone()
            .ok_or(SessionError::ColumnsNotChosen { id })
    }
}

/// Store that persists each session's tables as CSV files in a private
/// temporary directory (`<id>_data.csv` / `<id>_reference.csv`). The
/// directory, and with it every session, is removed when the store drops.
///
/// Column choices are kept in memory only; they double as the session
/// registry, so an id is unknown until `create` has finished writing both
/// files.
pub struct TempDirStore {
    dir: tempfile::TempDir,
    choices: Mutex<HashMap<SessionId, Option<ColumnChoice>>>,
}

impl TempDirStore {
    pub fn new() -> Result<Self> {
        let dir = tempfile::TempDir::new()?;
        tracing::info!(path = %dir.path().display(), "session storage directory created");
        Ok(Self {
            dir,
            choices: Mutex::new(HashMap::new()),
        })
    }

    fn data_path(&self, id: SessionId) -> PathBuf {
        self.dir.path().join(format!("{id}_data.csv"))
    }

    fn reference_path(&self, id: SessionId) -> PathBuf {
        self.dir.path().join(format!("{id}_reference.csv"))
    }

    fn load_table(&self, path: &Path) -> Result<Table> {
        let bytes = fs::read(path)?;
        Ok(refsift_ingest::load(&bytes, FileFormat::Csv)?)
    }
}

impl SessionStore for TempDirStore {
    fn create(&self, data: &Table, reference: &Table) -> Result<SessionId> {
        let id = SessionId::new();
        fs::write(self.data_path(id), to_csv_bytes(data)?)?;
        fs::write(self.reference_path(id), to_csv_bytes(reference)?)?;
        let mut choices = self.choices.lock().map_err(|_| lock_poisoned())?;
        choices.insert(id, None);
        tracing::debug!(session = %id, rows = data.n_rows(), "persisted session tables");
        Ok(id)
    }

    fn get_tables(&self, id: SessionId) -> Result<(Table, Table)> {
        {
            let choices = self.choices.lock().map_err(|_| lock_poisoned())?;
            if !choices.contains_key(&id) {
                return Err(SessionError::UnknownSession { id });
            }
        }
        let data = self.load_table(&self.data_path(id))?;
        let reference = self.load_table(&self.reference_path(id))?;
        Ok((data, reference))
    }

    fn set_columns(&self, id: SessionId, choice: ColumnChoice) -> Result<()> {
        let mut choices = self.choices.lock().map_err(|_| lock_poisoned())?;
        let entry = choices
            .get_mut(&id)
            .ok_or(SessionError::UnknownSession { id })?;
        *entry = Some(choice);
        Ok(())
    }

    fn get_columns(&self, id: SessionId) -> Result<ColumnChoice> {
        let choices = self.choices.lock().map_err(|_| lock_poisoned())?;
        choices
            .get(&id)
            .ok_or(SessionError::UnknownSession { id })?
            .clone()
            .ok_or(SessionError::ColumnsNotChosen { id })
    }
}
