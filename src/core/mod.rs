pub mod dates;
pub mod etl;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod sanitize;
