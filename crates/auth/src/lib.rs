//! `storefront-auth`: session access boundary.
//!
//! There is no credential protocol here: the gate is a flag flipped by explicit
//! log in / log out actions, and `AccessControl` is the seam a login screen
//! talks to.

pub mod access_control;
pub mod gate;
pub mod roles;

pub use access_control::{AccessControl, BasicAccessControl};
pub use gate::AccessGate;
pub use roles::Role;
