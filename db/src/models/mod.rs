pub mod assignment;
pub mod submission;
pub mod user;

pub use assignment::Entity as Assignment;
pub use submission::Entity as Submission;
pub use user::Entity as User;
