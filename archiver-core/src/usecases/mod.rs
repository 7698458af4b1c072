mod archive_repository;
mod error;
mod fetch_api_token;
mod fetch_roster;
mod resolve_username;

#[cfg(test)]
pub mod tests;

pub use self::{
    archive_repository::*, error::Error, fetch_api_token::*, fetch_roster::*,
    resolve_username::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::gitlab::{GitLabGateway, MemberPage},
    };
}
