//! Response types shared by the services and the HTTP API, grouped by the
//! dashboard element they describe.

pub mod layout;
pub mod proportion;
pub mod scatter;
pub mod summary;
