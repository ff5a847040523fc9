// Rust guideline compliant 2026-02-06

//! Storage module for the JSONL record file.
//!
//! Users, tickets and comments live in one JSON Lines file, one tagged
//! record per line. Writes go through [`Storage::transaction`], which holds
//! an exclusive file lock, applies the closure to an in-memory working copy
//! and, only if the closure succeeds, replaces the file with a single
//! temp-file rename. Several writes in one transaction therefore land
//! together or not at all.

use crate::error::{EntityKind, Error, Field, Result, ValidationError};
use crate::identity;
use crate::models::{Comment, Status, Ticket, User};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// One line of the record file.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Record {
    User(User),
    Ticket(Ticket),
    Comment(Comment),
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RecordRef<'a> {
    User(&'a User),
    Ticket(&'a Ticket),
    Comment(&'a Comment),
}

/// Ticket filter for [`Snapshot::query_tickets`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketQuery {
    /// Only tickets owned by this user ID.
    pub owner: Option<String>,
    /// Only tickets in this status.
    pub status: Option<Status>,
}

impl TicketQuery {
    /// Matches tickets owned by `owner`.
    #[must_use]
    pub fn owned_by(owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
            status: None,
        }
    }

    /// Matches tickets in `status`.
    #[must_use]
    pub fn in_status(status: Status) -> Self {
        Self {
            owner: None,
            status: Some(status),
        }
    }

    /// Narrows the query to `status`.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(owner) = &self.owner {
            if ticket.owner != *owner {
                return false;
            }
        }
        if let Some(status) = self.status {
            if ticket.status != status {
                return false;
            }
        }
        true
    }
}

/// A consistent, read-only view of every record.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    users: Vec<User>,
    tickets: Vec<Ticket>,
    comments: Vec<Comment>,
}

impl Snapshot {
    /// Returns all users in registration order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Looks up a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no user has this ID.
    pub fn user(&self, id: &str) -> Result<&User> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or_else(|| Error::not_found(EntityKind::User, id))
    }

    /// Looks up a user by username, ignoring case.
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| fold_case(&user.username) == fold_case(username))
    }

    /// Returns all tickets in creation order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Looks up a ticket by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no ticket has this ID.
    pub fn ticket(&self, id: &str) -> Result<&Ticket> {
        self.tickets
            .iter()
            .find(|ticket| ticket.id == id)
            .ok_or_else(|| Error::not_found(EntityKind::Ticket, id))
    }

    /// Returns the tickets matching `query`.
    pub fn query_tickets(&self, query: &TicketQuery) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|ticket| query.matches(ticket))
            .collect()
    }

    /// Returns all comments.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Looks up a comment by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no comment has this ID.
    pub fn comment(&self, id: &str) -> Result<&Comment> {
        self.comments
            .iter()
            .find(|comment| comment.id == id)
            .ok_or_else(|| Error::not_found(EntityKind::Comment, id))
    }

    /// Returns the comments of one ticket, oldest first.
    pub fn comments_for(&self, ticket_id: &str) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .comments
            .iter()
            .filter(|comment| comment.ticket == ticket_id)
            .collect();
        comments.sort_by_key(|comment| comment.created);
        comments
    }

    /// Checks referential integrity and per-record validity.
    ///
    /// # Errors
    ///
    /// Returns `Integrity` if:
    /// - An ID is malformed or used twice
    /// - Two users share a username or email
    /// - A ticket's owner or a comment's author does not exist
    /// - A comment points at a missing ticket
    /// - A record fails its own validation
    pub fn validate_integrity(&self) -> Result<()> {
        let mut user_ids = HashSet::new();
        let mut usernames = HashSet::new();
        let mut emails = HashSet::new();
        for user in &self.users {
            identity::validate_id_format(identity::USER_PREFIX, &user.id)?;
            user.validate()
                .map_err(|err| Error::Integrity(format!("user {}: {}", user.id, err)))?;
            if !user_ids.insert(user.id.as_str()) {
                return Err(Error::Integrity(format!("duplicate user ID {}", user.id)));
            }
            if !usernames.insert(fold_case(&user.username)) {
                return Err(Error::Integrity(format!(
                    "duplicate username {}",
                    user.username
                )));
            }
            if !emails.insert(fold_case(&user.email)) {
                return Err(Error::Integrity(format!("duplicate email {}", user.email)));
            }
        }

        let mut ticket_ids = HashSet::new();
        for ticket in &self.tickets {
            identity::validate_id_format(identity::TICKET_PREFIX, &ticket.id)?;
            ticket
                .validate()
                .map_err(|err| Error::Integrity(format!("ticket {}: {}", ticket.id, err)))?;
            if !ticket_ids.insert(ticket.id.as_str()) {
                return Err(Error::Integrity(format!(
                    "duplicate ticket ID {}",
                    ticket.id
                )));
            }
            if !user_ids.contains(ticket.owner.as_str()) {
                return Err(Error::Integrity(format!(
                    "ticket {} has unknown owner {}",
                    ticket.id, ticket.owner
                )));
            }
        }

        let mut comment_ids = HashSet::new();
        for comment in &self.comments {
            identity::validate_id_format(identity::COMMENT_PREFIX, &comment.id)?;
            if comment.body.trim().is_empty() {
                return Err(Error::Integrity(format!(
                    "comment {} has an empty body",
                    comment.id
                )));
            }
            if !comment_ids.insert(comment.id.as_str()) {
                return Err(Error::Integrity(format!(
                    "duplicate comment ID {}",
                    comment.id
                )));
            }
            if !ticket_ids.contains(comment.ticket.as_str()) {
                return Err(Error::Integrity(format!(
                    "comment {} belongs to unknown ticket {}",
                    comment.id, comment.ticket
                )));
            }
            if !user_ids.contains(comment.author.as_str()) {
                return Err(Error::Integrity(format!(
                    "comment {} has unknown author {}",
                    comment.id, comment.author
                )));
            }
        }

        Ok(())
    }
}

/// Mutable working copy handed to a transaction closure.
///
/// Reads go through [`Snapshot`] via `Deref`. Nothing reaches disk unless the
/// closure returns `Ok`.
#[derive(Debug)]
pub struct Transaction {
    snapshot: Snapshot,
    dirty: bool,
}

impl Deref for Transaction {
    type Target = Snapshot;

    fn deref(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl Transaction {
    fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            dirty: false,
        }
    }

    /// Returns true if any write was made.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the user is invalid or the username or
    /// email is taken.
    pub fn insert_user(&mut self, mut user: User) -> Result<User> {
        user.validate()?;
        if self.user_by_username(&user.username).is_some() {
            return Err(ValidationError::field(
                Field::Username,
                "A user with that username already exists.",
            )
            .into());
        }
        if self
            .snapshot
            .users
            .iter()
            .any(|existing| fold_case(&existing.email) == fold_case(&user.email))
        {
            return Err(ValidationError::field(
                Field::Email,
                "A user with that email already exists.",
            )
            .into());
        }

        let mut nonce = 0u32;
        while self.snapshot.users.iter().any(|existing| existing.id == user.id) {
            nonce = nonce.saturating_add(1);
            user.id = identity::generate_id(
                identity::USER_PREFIX,
                &[&user.username, &user.email],
                user.created.timestamp_micros(),
                nonce,
            );
        }

        self.snapshot.users.push(user.clone());
        self.dirty = true;
        Ok(user)
    }

    /// Stores a new ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket is invalid or its owner does not exist.
    pub fn insert_ticket(&mut self, mut ticket: Ticket) -> Result<Ticket> {
        ticket.validate()?;
        self.user(&ticket.owner)?;

        let mut nonce = 0u32;
        while self
            .snapshot
            .tickets
            .iter()
            .any(|existing| existing.id == ticket.id)
        {
            nonce = nonce.saturating_add(1);
            ticket.id = identity::generate_id(
                identity::TICKET_PREFIX,
                &[&ticket.title, &ticket.owner],
                ticket.created.timestamp_micros(),
                nonce,
            );
        }

        self.snapshot.tickets.push(ticket.clone());
        self.dirty = true;
        Ok(ticket)
    }

    /// Replaces a stored ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ticket does not exist
    /// - The owner, title or creation time differs from the stored one
    pub fn update_ticket(&mut self, ticket: Ticket) -> Result<()> {
        ticket.validate()?;
        let position = self
            .snapshot
            .tickets
            .iter()
            .position(|existing| existing.id == ticket.id)
            .ok_or_else(|| Error::not_found(EntityKind::Ticket, ticket.id.clone()))?;

        let existing = &self.snapshot.tickets[position];
        if existing.owner != ticket.owner {
            return Err(Error::Integrity(format!(
                "owner of ticket {} cannot change",
                ticket.id
            )));
        }
        if existing.title != ticket.title {
            return Err(Error::Integrity(format!(
                "title of ticket {} cannot change",
                ticket.id
            )));
        }
        if existing.created != ticket.created {
            return Err(Error::Integrity(format!(
                "creation time of ticket {} cannot change",
                ticket.id
            )));
        }

        self.snapshot.tickets[position] = ticket;
        self.dirty = true;
        Ok(())
    }

    /// Deletes a ticket together with its comments.
    ///
    /// # Returns
    ///
    /// The number of comments removed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the ticket does not exist.
    pub fn delete_ticket(&mut self, id: &str) -> Result<usize> {
        let initial_len = self.snapshot.tickets.len();
        self.snapshot.tickets.retain(|ticket| ticket.id != id);
        if self.snapshot.tickets.len() == initial_len {
            return Err(Error::not_found(EntityKind::Ticket, id));
        }

        let initial_comments = self.snapshot.comments.len();
        self.snapshot.comments.retain(|comment| comment.ticket != id);
        self.dirty = true;
        Ok(initial_comments - self.snapshot.comments.len())
    }

    /// Appends a comment.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket or author does not exist.
    pub fn insert_comment(&mut self, mut comment: Comment) -> Result<Comment> {
        self.ticket(&comment.ticket)?;
        self.user(&comment.author)?;

        let mut nonce = 0u32;
        while self
            .snapshot
            .comments
            .iter()
            .any(|existing| existing.id == comment.id)
        {
            nonce = nonce.saturating_add(1);
            comment.id = identity::generate_id(
                identity::COMMENT_PREFIX,
                &[&comment.ticket, &comment.author, &comment.body],
                comment.created.timestamp_micros(),
                nonce,
            );
        }

        self.snapshot.comments.push(comment.clone());
        self.dirty = true;
        Ok(comment)
    }
}

/// Storage engine for Helpdesk records.
#[derive(Debug, Clone)]
pub struct Storage {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { path })
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("jsonl.lock")
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("jsonl.tmp")
    }

    /// Loads every record using streaming deserialization.
    ///
    /// A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a record is malformed.
    pub fn load(&self) -> Result<Snapshot> {
        use std::fs::File;
        use std::io::BufReader;

        if !self.path.exists() {
            return Ok(Snapshot::default());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let stream = serde_json::Deserializer::from_reader(reader).into_iter::<Record>();

        let mut snapshot = Snapshot::default();
        for (index, result) in stream.enumerate() {
            let record = result
                .map_err(|e| Error::InvalidRecord(format!("record {}: {}", index + 1, e)))?;
            match record {
                Record::User(user) => snapshot.users.push(user),
                Record::Ticket(ticket) => snapshot.tickets.push(ticket),
                Record::Comment(comment) => snapshot.comments.push(comment),
            }
        }

        Ok(snapshot)
    }

    /// Runs `f` against a working copy and commits it atomically.
    ///
    /// The exclusive lock is held for the whole read-modify-write cycle. If
    /// `f` returns `Err`, the working copy is dropped and the file is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns the closure's error, or a storage error if loading, integrity
    /// validation, or writing fails.
    pub fn transaction<F, T, E>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut Transaction) -> std::result::Result<T, E>,
        E: From<Error>,
    {
        self.with_lock(|| {
            let snapshot = self.load()?;
            let mut tx = Transaction::new(snapshot);
            let value = f(&mut tx)?;

            if tx.dirty {
                tx.snapshot.validate_integrity()?;
                self.write_snapshot(&tx.snapshot)?;
            }

            Ok(value)
        })
    }

    /// Executes a closure with an exclusive lock on the storage file.
    ///
    /// Blocks until the lock is available, so concurrent writers are
    /// serialized. The lock is released when the closure returns, on every
    /// path.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock file cannot be opened or locked, or if
    /// the closure fails.
    pub fn with_lock<F, T, E>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: From<Error>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
            .map_err(Error::from)?;

        lock_file.lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }

    fn write_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        use std::fs::File;
        use std::io::{BufWriter, Write};

        let temp_path = self.temp_path();
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);

            let records = snapshot
                .users
                .iter()
                .map(RecordRef::User)
                .chain(snapshot.tickets.iter().map(RecordRef::Ticket))
                .chain(snapshot.comments.iter().map(RecordRef::Comment));
            for record in records {
                serde_json::to_writer(&mut writer, &record)?;
                writer.write_all(b"\n")?;
            }

            let file = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

/// Key under which usernames and emails are compared.
fn fold_case(value: &str) -> String {
    value.trim().to_lowercase()
}
