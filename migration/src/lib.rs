//! Schema for the `users`, `assignments` and `submissions` collections.

pub mod migrator;

pub mod migrations {
    pub mod m202505290001_create_users;
    pub mod m202505290002_create_assignments;
    pub mod m202505290003_create_submissions;
}

pub use migrator::Migrator;
