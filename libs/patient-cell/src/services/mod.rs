pub mod patient;

pub use patient::{urgent_first, PatientService};
