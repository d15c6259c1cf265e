pub mod director;
pub mod movie;

pub use director::Director;
pub use movie::Movie;
