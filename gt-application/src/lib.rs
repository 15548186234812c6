#[macro_use]
extern crate log;

mod live_view;
mod provision_days;
mod sign_out;
mod submit_entry;

pub mod prelude {
    pub use super::{live_view::*, provision_days::*, sign_out::*, submit_entry::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use gt_core::{entities::*, gateways, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
