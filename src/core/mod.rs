pub mod errors;
mod gates;
mod register;
mod state;

pub use gates::Gate;
pub use register::Register;
pub use state::Qubit;
