//! Business logic of GratiTree: the seams towards the document store and
//! the identity provider, and the usecases built on top of them.

pub mod db;
pub mod gateways;
pub mod repositories;
pub mod text;
pub mod usecases;

pub mod entities {
    pub use gt_entities::{day::*, entry::*, id::*, time::*, tree::*, user::*};
}

pub use self::repositories::Error as RepoError;
