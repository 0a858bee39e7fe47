pub mod agreement;
pub mod estimation;
pub mod pending;
pub mod router;
pub mod verification;
pub mod wizard;
