mod access_window;
mod build_forest;
mod day_key;
mod error;
mod provision_days;
mod quota;
mod submit_entry;


pub use self::{
    access_window::*, build_forest::*, day_key::*, error::Error, provision_days::*, quota::*,
    submit_entry::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
