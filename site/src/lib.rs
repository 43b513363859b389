//! Library surface of the site server, split out so integration tests
//! can build the router against a swapped-in relay.

pub mod routes;
pub mod state;
pub mod views;
