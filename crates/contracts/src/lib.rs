//! Wire contracts shared between the back-office frontend and the REST backend.

pub mod domain;
pub mod shared;
pub mod system;
