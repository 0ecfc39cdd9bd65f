pub mod publication_state;
pub mod publication_type;
