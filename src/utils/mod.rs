pub mod dates;
pub mod environment;
pub mod paths;
pub mod terminal;

pub use dates::format_date;
pub use environment::resolve_data_dir;
pub use paths::format_path_with_tilde;
pub use terminal::strip_ansi_codes;
