pub mod fields;
pub mod ids;
pub mod test_utils;

pub use ids::new_id;
