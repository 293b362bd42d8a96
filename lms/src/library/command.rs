pub mod load_library_cmd;
pub mod save_library_cmd;
