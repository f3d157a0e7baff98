//! Integration tests for the cek execution context, views and spinner

mod cli_binary;
mod progress_output;
mod spinner_properties;
mod test_utils;
mod view_rendering;
