pub mod manager;
pub mod models;
pub mod query_builder;
pub mod record;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use models::Student;
pub use record::{RecordError, StudentFields, StudentForm};
pub use repository::StudentRepository;
