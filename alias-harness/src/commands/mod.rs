pub mod impact;
pub mod run;
