pub mod indexed_timing;
pub mod keyed_timing;
pub mod runner;
pub mod timing;
pub mod timing_writer;
pub mod validator;
