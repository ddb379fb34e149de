pub mod utils;

pub use utils::logging::init_logging;
