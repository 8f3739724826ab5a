pub mod correct;
pub mod process;
