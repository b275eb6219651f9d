pub mod mysql_repo;

pub use mysql_repo::*;
